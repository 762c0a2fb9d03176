//! Error types for student request handlers.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for request handler operations.
#[derive(Debug)]
pub enum HandlerError {
    /// Request body could not be decoded into the expected input.
    DecodeFailed(String),
    /// Request was well-formed but violates a request-shape rule.
    InvalidArgument(String),
    /// Store rejected or failed the operation.
    Store(StoreError),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            HandlerError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            HandlerError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Store(err)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::InvalidArgument(_) => 400,
            HandlerError::Store(StoreError::NotFound(_)) => 404,
            HandlerError::Store(StoreError::NameNotFound(_)) => 404,
            HandlerError::Store(StoreError::AlreadyExists(_)) => 409,
            HandlerError::Store(StoreError::InvalidArgument(_)) => 400,
            HandlerError::Store(StoreError::LockPoisoned(_)) => 500,
        }
    }
}
