//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::CafeNotFound | Self::LocationNotFound | Self::NoCafes => StatusCode::NOT_FOUND,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Key used inside the `{"error": {...}}` payload
    ///
    /// This is the canonical reason phrase of the mapped status code, so
    /// clients see `"Not Found"`, `"Forbidden"` and so on.
    pub fn label(&self) -> &'static str {
        self.http_status()
            .canonical_reason()
            .unwrap_or("Internal Server Error")
    }
}
