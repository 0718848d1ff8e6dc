#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("value cannot be null: '{name}'")]
    Null { name: &'static str },

    #[error("the value cannot be an empty string or composed entirely of whitespace: '{name}'")]
    WhiteSpace { name: &'static str },

    #[error("the value cannot be empty: '{name}'")]
    Empty { name: &'static str },

    #[error("the '{name}' must be between {lower} and {upper}, got {value}")]
    OutOfRange {
        name:  &'static str,
        value: String,
        lower: String,
        upper: String,
    },

    #[error("{message} ('{name}')")]
    Condition { name: &'static str, message: String },

    #[error("the `{url}` is not a valid URL ('{name}')")]
    InvalidUrl { name: &'static str, url: String },
}

impl VerifyError {
    /// The parameter the check failed on.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null { name }
            | Self::WhiteSpace { name }
            | Self::Empty { name }
            | Self::OutOfRange { name, .. }
            | Self::Condition { name, .. }
            | Self::InvalidUrl { name, .. } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
