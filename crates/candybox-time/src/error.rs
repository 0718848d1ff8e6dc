use chrono::NaiveDateTime;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("string was not recognized as a valid date time: '{0}'")]
    InvalidDateTime(String),

    #[error("date time styles {0} cannot be combined")]
    InvalidStyles(String),

    #[error("'{value}' does not match pattern '{pattern}'")]
    PatternMismatch {
        value:   String,
        pattern: String,
        #[source]
        source:  chrono::ParseError,
    },

    #[error("invalid format pattern '{0}'")]
    InvalidPattern(String),

    #[error("shifting '{0}' leaves the representable date range")]
    OutOfRange(NaiveDateTime),

    #[error(transparent)]
    Culture(#[from] candybox_text::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
