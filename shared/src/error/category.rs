//! Error category by code range

use super::codes::ErrorCode;

/// Coarse grouping of [`ErrorCode`] values
///
/// Only `System` errors are logged when turned into a response; the rest are
/// the caller's problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Request errors (0xxx)
    Request,
    /// Order rule violations (4xxx)
    Order,
    /// Server side failures (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::Request,
            4000..5000 => Self::Order,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::Request);
        assert_eq!(ErrorCategory::from_code(4004), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9003), ErrorCategory::System);
    }

    #[test]
    fn test_only_server_failures_are_system() {
        assert_eq!(ErrorCode::RequiredField.category(), ErrorCategory::Request);
        assert_eq!(ErrorCode::OrderNotFound.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::ExportFailed.category(), ErrorCategory::System);
    }
}
