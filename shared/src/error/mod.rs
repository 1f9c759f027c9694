//! Error handling shared by every HTTP handler
//!
//! - [`ErrorCode`]: numeric codes (0xxx request, 4xxx order, 9xxx server)
//! - [`AppError`]: code, message and optional details
//! - [`ErrorBody`]: the JSON an `AppError` renders to
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Invalid email format")
//!     .with_detail("field", "customer_email");
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
