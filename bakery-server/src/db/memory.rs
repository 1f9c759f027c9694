//! In-memory store
//!
//! Same contract as the SurrealDB store, backed by vectors behind an
//! `RwLock`. Insertion order is preserved.

use async_trait::async_trait;
use shared::models::{MenuItem, Order};
use tokio::sync::RwLock;

use super::store::{CatalogStore, LIST_LIMIT, OrderStore, RepoError, RepoResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    menu_items: RwLock<Vec<MenuItem>>,
    orders: RwLock<Vec<Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn count_menu_items(&self) -> RepoResult<u64> {
        Ok(self.menu_items.read().await.len() as u64)
    }

    async fn seed_menu_items(&self, items: &[MenuItem]) -> RepoResult<()> {
        let mut stored = self.menu_items.write().await;
        for item in items {
            if !stored.iter().any(|s| s.id == item.id) {
                stored.push(item.clone());
            }
        }
        Ok(())
    }

    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>> {
        let stored = self.menu_items.read().await;
        Ok(stored.iter().take(LIST_LIMIT).cloned().collect())
    }

    async fn list_menu_items_by_category(&self, category: &str) -> RepoResult<Vec<MenuItem>> {
        let stored = self.menu_items.read().await;
        Ok(stored
            .iter()
            .filter(|item| item.category.as_str() == category)
            .take(LIST_LIMIT)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn insert_order(&self, order: &Order) -> RepoResult<()> {
        let mut stored = self.orders.write().await;
        if stored.iter().any(|o| o.id == order.id) {
            return Err(RepoError::Duplicate(format!("order {}", order.id)));
        }
        stored.push(order.clone());
        Ok(())
    }

    async fn find_order(&self, id: &str) -> RepoResult<Option<Order>> {
        let stored = self.orders.read().await;
        Ok(stored.iter().find(|o| o.id == id).cloned())
    }

    async fn all_orders(&self) -> RepoResult<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }
}
