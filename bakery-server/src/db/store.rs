//! Store traits
//!
//! The services only see these traits, so the SurrealDB store and the
//! in-memory store are interchangeable.

use async_trait::async_trait;
use shared::error::AppError;
use shared::models::{MenuItem, Order};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        if matches!(
            err,
            surrealdb::Error::Api(surrealdb::error::Api::ConnectionUninitialised)
        ) {
            return RepoError::Unavailable(err.to_string());
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => {
                AppError::with_message(shared::ErrorCode::AlreadyExists, msg)
            }
            RepoError::Validation(msg) => AppError::validation(msg),
            // Storage details stay in the log
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Store operation failed");
                AppError::database("Database error")
            }
            RepoError::Unavailable(msg) => {
                tracing::error!(error = %msg, "Store unreachable");
                AppError::storage_unavailable("Storage is unavailable")
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Maximum records returned by a single listing
pub const LIST_LIMIT: usize = 1000;

/// Menu item storage
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Number of stored menu items
    async fn count_menu_items(&self) -> RepoResult<u64>;

    /// Store the seed batch keyed by id; writing it twice leaves one copy
    async fn seed_menu_items(&self, items: &[MenuItem]) -> RepoResult<()>;

    /// All items, capped at [`LIST_LIMIT`]
    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>>;

    /// Items whose category equals `category` exactly; unknown values match nothing
    async fn list_menu_items_by_category(&self, category: &str) -> RepoResult<Vec<MenuItem>>;
}

/// Order storage, append-only
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order; fails with `Duplicate` if the id exists
    async fn insert_order(&self, order: &Order) -> RepoResult<()>;

    async fn find_order(&self, id: &str) -> RepoResult<Option<Order>>;

    /// Every stored order, in no particular order
    async fn all_orders(&self) -> RepoResult<Vec<Order>>;
}
