//! Error types for Bykorp
//!
//! `BykorpError` carries the user-facing message for every failure the API
//! can report. The server maps each variant to an HTTP status.

/// Application-specific error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BykorpError {
    #[error("{0}")]
    IllegalArgument(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    DatabaseError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl BykorpError {
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        BykorpError::IllegalArgument(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        BykorpError::DatabaseError(message.into())
    }
}
