//! Database Module
//!
//! Embedded SurrealDB connection plus the store traits the services use.
//!
//! - [`DbService`] - owns the SurrealDB handle
//! - [`CatalogStore`] / [`OrderStore`] - storage contracts
//! - [`SurrealStore`] - SurrealDB implementation
//! - [`MemoryStore`] - in-memory implementation for tests and local runs

pub mod memory;
pub mod seed;
pub mod store;
pub mod surreal;

pub use memory::MemoryStore;
pub use store::{CatalogStore, LIST_LIMIT, OrderStore, RepoError, RepoResult};
pub use surreal::SurrealStore;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::Config;

/// Database service - owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the database selected by `DATABASE_PATH` and select namespace/database
    pub async fn new(config: &Config) -> RepoResult<Self> {
        let db = if config.uses_memory_db() {
            Surreal::new::<Mem>(())
                .await
                .map_err(|e| RepoError::Unavailable(format!("in-memory engine: {e}")))?
        } else {
            std::fs::create_dir_all(&config.database_path).map_err(|e| {
                RepoError::Unavailable(format!(
                    "cannot create {}: {e}",
                    config.database_path
                ))
            })?;
            Surreal::new::<RocksDb>(config.database_path.as_str())
                .await
                .map_err(|e| {
                    RepoError::Unavailable(format!("{}: {e}", config.database_path))
                })?
        };

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_name.as_str())
            .await?;

        tracing::info!(
            path = %config.database_path,
            namespace = %config.db_namespace,
            database = %config.db_name,
            "Database connection established"
        );

        Ok(Self { db })
    }

    /// SurrealDB-backed store sharing this connection
    pub fn store(&self) -> SurrealStore {
        SurrealStore::new(self.db.clone())
    }
}
