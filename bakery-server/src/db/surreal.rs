//! SurrealDB store
//!
//! Record keys are the domain ids (`menu_items:⟨uuid⟩`, `orders:⟨uuid⟩`). The
//! `id` field is dropped from written content and projected back as a plain
//! string with `record::id(id)`, so rows decode straight into the shared models.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, Order};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::store::{CatalogStore, LIST_LIMIT, OrderStore, RepoError, RepoResult};

const MENU_FIELDS: &str = "record::id(id) AS id, name, description, price, category, image, \
                           ingredients, available";

const ORDER_FIELDS: &str = "record::id(id) AS id, customer_name, customer_email, \
                            customer_phone, items, total_amount, pickup_time, \
                            special_requests, order_date, status";

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

/// Serialize a record without its `id`, which lives in the record key
fn content_without_id<T: Serialize>(record: &T) -> RepoResult<serde_json::Value> {
    let mut value =
        serde_json::to_value(record).map_err(|e| RepoError::Validation(e.to_string()))?;
    if let Some(obj) = value.as_object_mut() {
        obj.remove("id");
    }
    Ok(value)
}

#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Db>,
}

impl SurrealStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[async_trait]
impl CatalogStore for SurrealStore {
    async fn count_menu_items(&self) -> RepoResult<u64> {
        let mut result = self
            .db
            .query("SELECT count() FROM menu_items GROUP ALL")
            .await?;
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    async fn seed_menu_items(&self, items: &[MenuItem]) -> RepoResult<()> {
        // Deterministic keys: a second seeder rewrites the same records
        for item in items {
            let data = content_without_id(item)?;
            self.db
                .query("UPSERT type::thing('menu_items', $id) CONTENT $data RETURN NONE")
                .bind(("id", item.id.clone()))
                .bind(("data", data))
                .await?
                .check()?;
        }
        Ok(())
    }

    /// Rows come back in record-key order, not insertion order. Seed keys
    /// are fixed, so the order is the same on every call and every database.
    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>> {
        let mut result = self
            .db
            .query(format!("SELECT {MENU_FIELDS} FROM menu_items LIMIT $limit"))
            .bind(("limit", LIST_LIMIT))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items)
    }

    async fn list_menu_items_by_category(&self, category: &str) -> RepoResult<Vec<MenuItem>> {
        let mut result = self
            .db
            .query(format!(
                "SELECT {MENU_FIELDS} FROM menu_items WHERE category = $category LIMIT $limit"
            ))
            .bind(("category", category.to_string()))
            .bind(("limit", LIST_LIMIT))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items)
    }
}

#[async_trait]
impl OrderStore for SurrealStore {
    async fn insert_order(&self, order: &Order) -> RepoResult<()> {
        let data = content_without_id(order)?;
        let response = self
            .db
            .query("CREATE type::thing('orders', $id) CONTENT $data RETURN NONE")
            .bind(("id", order.id.clone()))
            .bind(("data", data))
            .await?;

        match response.check() {
            Ok(_) => Ok(()),
            Err(e) if e.to_string().contains("already exists") => {
                Err(RepoError::Duplicate(format!("order {}", order.id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_order(&self, id: &str) -> RepoResult<Option<Order>> {
        let mut result = self
            .db
            .query(format!(
                "SELECT {ORDER_FIELDS} FROM type::thing('orders', $id)"
            ))
            .bind(("id", id.to_string()))
            .await?;
        let order: Option<Order> = result.take(0)?;
        Ok(order)
    }

    async fn all_orders(&self) -> RepoResult<Vec<Order>> {
        let mut result = self
            .db
            .query(format!("SELECT {ORDER_FIELDS} FROM orders"))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders)
    }
}
