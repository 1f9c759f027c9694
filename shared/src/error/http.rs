//! HTTP status for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed
            | Self::RequiredField
            | Self::OrderEmpty
            | Self::OrderInvalidQuantity
            | Self::OrderInvalidAmount => StatusCode::BAD_REQUEST,

            Self::NotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists => StatusCode::CONFLICT,

            // Client may retry
            Self::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            Self::DatabaseError | Self::ExportFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
