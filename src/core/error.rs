use thiserror::Error;

/// Broad class of a conversion failure, used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Upstream,
    Unexpected,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Amount must be greater than 0")]
    InvalidAmount,

    #[error("Failed to fetch exchange rate")]
    RateFetchFailed,

    #[error("Exchange rate for {to} not found")]
    RateNotFound { to: String },

    #[error("Failed to convert currency")]
    Unexpected,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::MissingParameters | ConvertError::InvalidAmount => ErrorKind::Validation,
            ConvertError::RateNotFound { .. } => ErrorKind::NotFound,
            ConvertError::RateFetchFailed => ErrorKind::Upstream,
            ConvertError::Unexpected => ErrorKind::Unexpected,
        }
    }
}
