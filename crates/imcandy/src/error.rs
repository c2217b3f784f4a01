use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CandyError {
    #[error("no key point at position {0}")]
    KeyPointNotFound(f64),
    #[error("key point position is NaN")]
    NanKeyPoint,
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, CandyError>;
