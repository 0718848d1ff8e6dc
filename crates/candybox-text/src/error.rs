#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("value cannot be null: '{name}'")]
    NullArgument { name: &'static str },

    #[error("must specify valid information for parsing in the string: '{name}' is blank")]
    BlankArgument { name: &'static str },

    #[error("'{name}' must be greater than or equal to 0, got {value}")]
    Negative { name: &'static str, value: i64 },

    #[error("'{name}' ({value}) must be greater than or equal to '{lower_name}' ({lower})")]
    InvertedBounds {
        name:       &'static str,
        value:      i64,
        lower_name: &'static str,
        lower:      i64,
    },

    #[error("the specified string is not a valid {type_name} value: '{value}'")]
    InvalidNumber { type_name: &'static str, value: String },

    #[error("number styles {styles} are not supported when parsing {type_name}")]
    UnsupportedStyles { styles: String, type_name: &'static str },

    #[error("the value '{value}' is not a valid member of enum type {type_name}")]
    UnknownEnumMember { value: String, type_name: &'static str },

    #[error("input string is not a valid GUID in format '{format}': '{value}'")]
    InvalidGuid { value: String, format: char },

    #[error("invalid replacement character {0:?}")]
    InvalidReplacement(char),

    #[error("the specified string is not a valid Base64-encoded string")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("culture '{0}' is not supported")]
    CultureNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
