use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::core::{Config, Result, ServerError};
use crate::db::{CatalogStore, DbService, OrderStore};
use crate::services::notification::build_notifier;
use crate::services::{
    AnalyticsService, CatalogService, NotificationService, NotificationWorker, Notifier,
    OrderService,
};

/// Server state - shared handles to every service
///
/// Cheap to clone (everything is behind `Arc` or a channel sender).
/// Stores are injected as trait objects, so tests can build a state over
/// [`crate::db::MemoryStore`] without touching SurrealDB.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | catalog | CatalogService | menu reads and seeding |
/// | orders | OrderService | order create/read |
/// | analytics | AnalyticsService | aggregates |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: CatalogService,
    pub orders: OrderService,
    pub analytics: AnalyticsService,
}

impl ServerState {
    /// Open the database and wire the services
    ///
    /// Returns the state plus the notification worker handle. The worker ends
    /// once every clone of the state has been dropped.
    pub async fn initialize(config: &Config) -> Result<(Self, JoinHandle<()>)> {
        let db = DbService::new(config)
            .await
            .map_err(|e| ServerError::Storage(e.to_string()))?;
        let store = Arc::new(db.store());

        let notifier = build_notifier(config.mail.as_ref(), &config.business_name);

        Ok(Self::with_stores(
            config.clone(),
            store.clone(),
            store,
            notifier,
        ))
    }

    /// Build the state over explicit stores and notifier, spawning the worker
    pub fn with_stores(
        config: Config,
        catalog_store: Arc<dyn CatalogStore>,
        order_store: Arc<dyn OrderStore>,
        notifier: Arc<dyn Notifier>,
    ) -> (Self, JoinHandle<()>) {
        let (notifications, rx) = NotificationService::new(config.notify_queue_size);
        let worker = tokio::spawn(NotificationWorker::new(notifier).run(rx));

        let state = Self {
            catalog: CatalogService::new(catalog_store),
            orders: OrderService::new(order_store.clone(), notifications),
            analytics: AnalyticsService::new(order_store),
            config,
        };
        (state, worker)
    }
}
