//! Shared types for the bakery storefront
//!
//! Data models exchanged with the storefront frontend and the unified
//! error system used by every HTTP handler.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
