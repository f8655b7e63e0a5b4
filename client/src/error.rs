//! Client error types

use thiserror::Error;

/// Errors surfaced by [`crate::EmsClient`]
///
/// 401, 404 and 5xx map to distinct variants; remaining request failures
/// degrade to [`ClientError::Validation`] or [`ClientError::Internal`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Not authenticated")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Internal(String),

    #[error("Session expired, log in again")]
    SessionExpired,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
