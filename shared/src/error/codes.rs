//! Error codes returned to the storefront
//!
//! - 0xxx: request problems (validation, missing records)
//! - 4xxx: order rules
//! - 9xxx: server side failures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error code carried in every error body
///
/// Serialized as a bare `u16` so the frontend can switch on it without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // 0xxx: request
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    /// Blank or missing required field
    RequiredField = 7,

    // 4xxx: order
    OrderNotFound = 4001,
    /// Order has no line items
    OrderEmpty = 4002,
    /// Quantity outside 1..=9999
    OrderInvalidQuantity = 4003,
    /// Price or total negative, non-finite or above the limit
    OrderInvalidAmount = 4004,

    // 9xxx: server
    DatabaseError = 9002,
    /// Storage backend unreachable
    StorageUnavailable = 9003,
    ExportFailed = 9006,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message used by [`super::AppError::new`]
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order must contain at least one item",
            ErrorCode::OrderInvalidQuantity => "Item quantity is out of range",
            ErrorCode::OrderInvalidAmount => "Amount is out of range",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::StorageUnavailable => "Storage is unavailable",
            ErrorCode::ExportFailed => "Export failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

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
        Ok(match value {
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            7 => ErrorCode::RequiredField,
            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderEmpty,
            4003 => ErrorCode::OrderInvalidQuantity,
            4004 => ErrorCode::OrderInvalidAmount,
            9002 => ErrorCode::DatabaseError,
            9003 => ErrorCode::StorageUnavailable,
            9006 => ErrorCode::ExportFailed,
            _ => return Err(InvalidErrorCode(value)),
        })
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

    const ALL: [ErrorCode; 11] = [
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::RequiredField,
        ErrorCode::OrderNotFound,
        ErrorCode::OrderEmpty,
        ErrorCode::OrderInvalidQuantity,
        ErrorCode::OrderInvalidAmount,
        ErrorCode::DatabaseError,
        ErrorCode::StorageUnavailable,
        ErrorCode::ExportFailed,
    ];

    #[test]
    fn test_order_codes() {
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::OrderEmpty.code(), 4002);
        assert_eq!(ErrorCode::OrderInvalidQuantity.code(), 4003);
        assert_eq!(ErrorCode::OrderInvalidAmount.code(), 4004);
    }

    #[test]
    fn test_try_from_accepts_every_code() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderNotFound).unwrap();
        assert_eq!(json, "4001");

        let code: ErrorCode = serde_json::from_str("9003").unwrap();
        assert_eq!(code, ErrorCode::StorageUnavailable);
    }
}
