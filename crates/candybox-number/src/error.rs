#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("size must be greater than or equal to zero, got {0}")]
    NegativeSize(String),

    #[error("{0} has no decimal representation")]
    NotFinite(f64),

    #[error("{0} is outside the decimal range")]
    OutOfRange(String),

    #[error("'{name}' cannot be null or empty")]
    EmptyList { name: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
