//! Data models
//!
//! Shared between bakery-server and the storefront frontend (via API).
//! Every record id is an opaque UUID string; the storage layer uses it as the
//! record key, so the JSON shape is identical on the wire and in the store.

pub mod analytics;
pub mod menu_item;
pub mod order;
pub mod serde_helpers;

// Re-exports
pub use analytics::*;
pub use menu_item::*;
pub use order::*;
