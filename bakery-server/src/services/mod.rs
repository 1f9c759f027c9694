//! Services - business logic over the store traits
//!
//! - [`CatalogService`] - menu reads, seeds the sample menu on first read
//! - [`OrderService`] - order creation and lookup
//! - [`AnalyticsService`] - revenue, popularity and dashboard figures
//! - [`notification`] - confirmation emails on a background worker
//! - [`export`] - CSV export of orders

pub mod analytics;
pub mod catalog;
pub mod export;
pub mod money;
pub mod notification;
pub mod orders;

pub use analytics::AnalyticsService;
pub use catalog::CatalogService;
pub use notification::{NotificationService, NotificationWorker, Notifier};
pub use orders::OrderService;
