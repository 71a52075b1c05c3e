//! Unified error codes for the cafe API
//!
//! Error codes are grouped by range:
//! - 0xxx: Request errors
//! - 2xxx: Permission errors
//! - 6xxx: Cafe errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they can be logged and
/// compared without carrying the message around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    /// Form or path input could not be parsed
    ValidationFailed = 2,

    // ==================== 2xxx: Permission ====================
    /// Permission denied (wrong or missing api key)
    PermissionDenied = 2001,

    // ==================== 6xxx: Cafe ====================
    /// No cafe with the requested id
    CafeNotFound = 6001,
    /// No cafe at the requested location
    LocationNotFound = 6002,
    /// The cafe table is empty
    NoCafes = 6003,

    // ==================== 9xxx: System ====================
    /// The store rejected or failed a query
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default client-facing message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",

            // Permission
            ErrorCode::PermissionDenied => {
                "Sorry, that's not allowed. Make sure you have the correct api_key."
            }

            // Cafe
            ErrorCode::CafeNotFound => {
                "Sorry a cafe with that id was not found in the database."
            }
            ErrorCode::LocationNotFound => "Sorry, we don't have a cafe at that location.",
            ErrorCode::NoCafes => "Sorry, we don't have any cafes yet.",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Cafe
            6001 => Ok(ErrorCode::CafeNotFound),
            6002 => Ok(ErrorCode::LocationNotFound),
            6003 => Ok(ErrorCode::NoCafes),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::CafeNotFound.code(), 6001);
        assert_eq!(ErrorCode::LocationNotFound.code(), 6002);
        assert_eq!(ErrorCode::NoCafes.code(), 6003);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::CafeNotFound).unwrap();
        assert_eq!(json, "6001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::PermissionDenied);

        let code: ErrorCode = serde_json::from_str("9002").unwrap();
        assert_eq!(code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("9001");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::CafeNotFound), "6001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::LocationNotFound.message(),
            "Sorry, we don't have a cafe at that location."
        );
        assert_eq!(
            ErrorCode::CafeNotFound.message(),
            "Sorry a cafe with that id was not found in the database."
        );
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }

    #[test]
    fn test_try_from_covers_every_variant() {
        let codes = [
            ErrorCode::ValidationFailed,
            ErrorCode::PermissionDenied,
            ErrorCode::CafeNotFound,
            ErrorCode::LocationNotFound,
            ErrorCode::NoCafes,
            ErrorCode::DatabaseError,
        ];

        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }
}
