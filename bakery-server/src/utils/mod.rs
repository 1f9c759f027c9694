//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`request_log`] - per-request access log middleware
//! - [`time`] - UTC day boundaries and timestamp formats

pub mod logger;
pub mod request_log;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCode};
