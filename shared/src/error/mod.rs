//! Unified error system for the cafe API
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Error type with a code and a client-facing message
//!
//! # Error Code Ranges
//!
//! - 0xxx: Request errors
//! - 2xxx: Permission errors
//! - 6xxx: Cafe errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::CafeNotFound);
//! assert_eq!(err.http_status().as_u16(), 404);
//! assert_eq!(err.code.label(), "Not Found");
//!
//! let err = AppError::validation("toilet: unrecognised boolean 'maybe'");
//! assert_eq!(err.http_status().as_u16(), 400);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
