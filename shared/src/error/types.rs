//! Error type and its HTTP rendering

use super::codes::ErrorCode;
use crate::response::ErrorBody;
use http::StatusCode;
use thiserror::Error;

/// Application error with structured error code
///
/// This is the error type every handler returns. It carries:
/// - a standardized error code via [`ErrorCode`]
/// - the human-readable message sent to the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a forbidden error with the default api key message
    pub fn forbidden() -> Self {
        Self::new(ErrorCode::PermissionDenied)
    }
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;

/// Renders `{"error": {label: message}}` with the mapped status
///
/// Nothing is logged here; store failures are logged with their detail where
/// they are converted into an `AppError`.
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::new(self.code.label(), self.message);
        (status, Json(body)).into_response()
    }
}
