//! Catalog Service - menu reads with seed-on-first-read

use shared::models::MenuItem;
use std::sync::Arc;

use crate::db::seed::sample_menu;
use crate::db::{CatalogStore, RepoResult};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Seed the sample menu when the catalog is empty
    ///
    /// Two first readers may both see zero; seed records have fixed ids, so
    /// both writes land on the same keys.
    async fn ensure_seeded(&self) -> RepoResult<()> {
        if self.store.count_menu_items().await? > 0 {
            return Ok(());
        }
        let menu = sample_menu();
        self.store.seed_menu_items(&menu).await?;
        tracing::info!(items = menu.len(), "Seeded empty catalog with sample menu");
        Ok(())
    }

    pub async fn list_all(&self) -> RepoResult<Vec<MenuItem>> {
        self.ensure_seeded().await?;
        self.store.list_menu_items().await
    }

    /// Items in `category`; an unknown category yields an empty list
    pub async fn list_by_category(&self, category: &str) -> RepoResult<Vec<MenuItem>> {
        self.ensure_seeded().await?;
        self.store.list_menu_items_by_category(category).await
    }
}
