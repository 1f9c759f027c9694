//! Order Service - create and read orders
//!
//! Orders are append-only: created here, never updated or removed.

use chrono::Utc;
use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderCreate};
use std::sync::Arc;

use crate::db::{LIST_LIMIT, OrderStore};
use crate::services::notification::NotificationService;

/// Sort newest first
pub fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
}

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    notifications: NotificationService,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, notifications: NotificationService) -> Self {
        Self {
            store,
            notifications,
        }
    }

    /// Validate, persist, then queue the confirmation email
    ///
    /// Once the store write succeeds the order is returned, whatever happens
    /// to the email afterwards.
    pub async fn create_order(&self, request: OrderCreate) -> AppResult<Order> {
        request.validate()?;

        let order = request.into_order(uuid::Uuid::new_v4().to_string(), Utc::now());
        self.store.insert_order(&order).await?;

        tracing::info!(
            order_id = %order.id,
            items = order.items.len(),
            total = order.total_amount,
            "Order created"
        );

        self.notifications.enqueue(order.clone());
        Ok(order)
    }

    pub async fn get_order(&self, id: &str) -> AppResult<Order> {
        self.store
            .find_order(id)
            .await?
            .ok_or_else(|| AppError::order_not_found(id))
    }

    /// Newest first, capped at [`LIST_LIMIT`]
    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        let mut orders = self.store.all_orders().await?;
        sort_newest_first(&mut orders);
        orders.truncate(LIST_LIMIT);
        Ok(orders)
    }

    /// Every stored order, newest first, without the listing cap
    ///
    /// Used by the CSV export, which must contain one row per order.
    pub async fn all_orders(&self) -> AppResult<Vec<Order>> {
        let mut orders = self.store.all_orders().await?;
        sort_newest_first(&mut orders);
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use shared::ErrorCode;
    use shared::models::{CartItem, MenuCategory, OrderStatus};
    use std::collections::HashSet;
    use tokio::sync::mpsc;

    fn service() -> (OrderService, mpsc::Receiver<Order>) {
        let (notifications, rx) = NotificationService::new(64);
        (
            OrderService::new(Arc::new(MemoryStore::new()), notifications),
            rx,
        )
    }

    fn request(name: &str) -> OrderCreate {
        OrderCreate {
            customer_name: name.into(),
            customer_email: "ada@example.com".into(),
            customer_phone: "555-0100".into(),
            items: vec![CartItem {
                id: "m1".into(),
                name: "Signature Latte".into(),
                price: 4.5,
                quantity: 2,
                category: MenuCategory::Cafe,
            }],
            total_amount: 9.0,
            pickup_time: "Today 15:30".into(),
            special_requests: Some("Oat milk".into()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (orders, _rx) = service();
        let req = request("Ada");
        let created = orders.create_order(req.clone()).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.status, OrderStatus::Pending);

        let fetched = orders.get_order(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.customer_name, req.customer_name);
        assert_eq!(fetched.customer_email, req.customer_email);
        assert_eq!(fetched.customer_phone, req.customer_phone);
        assert_eq!(fetched.items, req.items);
        assert_eq!(fetched.total_amount, req.total_amount);
        assert_eq!(fetched.pickup_time, req.pickup_time);
    }

    #[tokio::test]
    async fn test_ids_unique_and_timestamps_non_decreasing() {
        let (orders, _rx) = service();
        let mut ids = HashSet::new();
        let mut last = None;
        for i in 0..10 {
            let order = orders.create_order(request(&format!("c{i}"))).await.unwrap();
            assert!(ids.insert(order.id.clone()));
            if let Some(prev) = last {
                assert!(order.order_date >= prev);
            }
            last = Some(order.order_date);
        }
    }

    #[tokio::test]
    async fn test_missing_order_is_not_found() {
        let (orders, _rx) = service();
        let err = orders.get_order("does-not-exist").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[tokio::test]
    async fn test_invalid_request_writes_nothing() {
        let (orders, mut rx) = service();
        let mut req = request("Ada");
        req.items.clear();

        let err = orders.create_order(req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
        assert!(orders.list_orders().await.unwrap().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (orders, _rx) = service();
        for i in 0..5 {
            orders.create_order(request(&format!("c{i}"))).await.unwrap();
        }
        let listed = orders.list_orders().await.unwrap();
        assert_eq!(listed.len(), 5);
        assert!(listed.windows(2).all(|w| w[0].order_date >= w[1].order_date));
    }

    #[tokio::test]
    async fn test_all_orders_is_not_capped() {
        let (orders, _rx) = service();
        for i in 0..=LIST_LIMIT {
            orders.create_order(request(&format!("c{i}"))).await.unwrap();
        }

        assert_eq!(orders.list_orders().await.unwrap().len(), LIST_LIMIT);

        let all = orders.all_orders().await.unwrap();
        assert_eq!(all.len(), LIST_LIMIT + 1);
        assert!(all.windows(2).all(|w| w[0].order_date >= w[1].order_date));
    }

    #[tokio::test]
    async fn test_created_order_is_queued_for_confirmation() {
        let (orders, mut rx) = service();
        let created = orders.create_order(request("Ada")).await.unwrap();
        assert_eq!(rx.recv().await.unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_order_survives_stopped_notifier() {
        let (orders, rx) = service();
        drop(rx);
        let created = orders.create_order(request("Ada")).await.unwrap();
        assert!(orders.get_order(&created.id).await.is_ok());
    }
}
