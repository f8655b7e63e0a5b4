//! Unified error handling
//!
//! Application-level error type and response structures:
//! - [`AppError`] — machine-readable [`ErrorCode`] plus a human message
//! - [`AppResponse`] — the `{code, message, data}` envelope
//!
//! # Error code → HTTP status
//!
//! | Range | Category | Status |
//! |-------|----------|--------|
//! | 1xxx | auth | 401/403 |
//! | 2xxx | permission | 403 |
//! | 4xxx | upload | 400/404/500 |
//! | 8xxx | employee | 404/409 |
//! | 9xxx | system | 500 |

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::ErrorCode;
use tracing::error;

use crate::db::repository::RepoError;
use crate::storage::StorageError;

/// Unified API response structure, re-exported for handlers
pub type AppResponse<T> = shared::ApiResponse<T>;

/// Application-level result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error: a stable error code plus a human-readable message
#[derive(Debug, thiserror::Error)]
#[error("{message} [{code:?}]")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.message().to_string(),
        }
    }

    /// Error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ========== Helper constructors ==========

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, message)
    }

    /// Invalid credentials with the unified message
    /// Used to prevent username enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::Success => StatusCode::OK,

            // Authentication (401)
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired
            | ErrorCode::TokenInvalid
            | ErrorCode::SessionExpired => StatusCode::UNAUTHORIZED,

            // Authorization (403)
            ErrorCode::AccountDisabled
            | ErrorCode::PermissionDenied
            | ErrorCode::AdminRequired => StatusCode::FORBIDDEN,

            // Not found (404)
            ErrorCode::NotFound | ErrorCode::EmployeeNotFound | ErrorCode::FileNotFound => {
                StatusCode::NOT_FOUND
            }

            // Conflict (409)
            ErrorCode::AlreadyExists | ErrorCode::EmployeeEmailExists => StatusCode::CONFLICT,

            // Validation (400)
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::RequiredField
            | ErrorCode::Unknown
            | ErrorCode::FileTooLarge
            | ErrorCode::FileTypeNotAllowed
            | ErrorCode::NoFileProvided
            | ErrorCode::EmptyFile
            | ErrorCode::NoFilename
            | ErrorCode::InvalidFilename => StatusCode::BAD_REQUEST,

            // System (500)
            ErrorCode::FileStorageFailed
            | ErrorCode::InternalError
            | ErrorCode::DatabaseError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 5xx detail goes to the log, clients get the generic message
        let message = if status.is_server_error() {
            error!(
                target: "internal",
                code = self.code.code(),
                error = %self.message,
                "Request failed"
            );
            self.code.message().to_string()
        } else {
            self.message
        };

        let body = Json(AppResponse::<()>::error(self.code.as_wire_code(), message));

        (status, body).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::validation(format!("Multipart error: {}", e))
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::EmployeeNotFound, msg),
            RepoError::Duplicate(msg) => {
                AppError::with_message(ErrorCode::EmployeeEmailExists, msg)
            }
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::InvalidFilename(msg) => {
                AppError::with_message(ErrorCode::InvalidFilename, msg)
            }
            StorageError::Io(e) => {
                AppError::with_message(ErrorCode::FileStorageFailed, e.to_string())
            }
        }
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse::ok(data))
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<AppResponse<T>> {
    Json(AppResponse::ok_with_message(data, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::unauthorized().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::new(ErrorCode::AdminRequired).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::new(ErrorCode::EmployeeNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::new(ErrorCode::FileTooLarge).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::database("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_credentials_is_generic() {
        // Same constructor used for both unknown-user and wrong-password
        let a = AppError::invalid_credentials();
        let b = AppError::invalid_credentials();
        assert_eq!(a.message, b.message);
        assert_eq!(a.code, ErrorCode::InvalidCredentials);
    }
}
