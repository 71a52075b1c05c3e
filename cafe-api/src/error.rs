//! Conversion from repository errors to API errors
//!
//! Lets handlers use `?` on gateway calls. A missing row becomes the
//! not-found payload; anything the store rejected is logged with its detail
//! and surfaced to the client as a generic database error.

use shared::error::{AppError, ErrorCode};

use crate::db::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => AppError::new(ErrorCode::CafeNotFound),
            RepoError::Database(detail) => {
                tracing::error!(error = %detail, "Cafe store error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}
