//! Order confirmation emails
//!
//! `OrderService` hands each persisted order to [`NotificationService`], which
//! only enqueues it. [`NotificationWorker`] drains the queue on its own task
//! and calls the configured [`Notifier`]. Nothing here can fail an order.
//!
//! - [`SmtpNotifier`] - delivers over SMTP (STARTTLS relay)
//! - [`DisabledNotifier`] - used when mail credentials are missing

mod render;
mod smtp;
mod worker;

pub use render::{Confirmation, render_confirmation};
pub use smtp::SmtpNotifier;
pub use worker::NotificationWorker;

use async_trait::async_trait;
use shared::models::Order;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::core::config::MailConfig;

/// Outcome of a delivery attempt that did not error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Not sent on purpose, with the reason
    Skipped(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid address: {0}")]
    Address(String),

    #[error("failed to build message: {0}")]
    Message(String),

    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, order: &Order) -> Result<Delivery, NotifyError>;
}

/// Notifier used when outbound mail is not configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send(&self, _order: &Order) -> Result<Delivery, NotifyError> {
        Ok(Delivery::Skipped("mail credentials not configured".into()))
    }
}

/// Pick the notifier for the current configuration
///
/// Falls back to [`DisabledNotifier`] when credentials are absent or the
/// transport cannot be built, so bad mail settings never stop the server.
pub fn build_notifier(mail: Option<&MailConfig>, business_name: &str) -> Arc<dyn Notifier> {
    let Some(mail) = mail else {
        tracing::warn!("SMTP credentials not configured, confirmation emails disabled");
        return Arc::new(DisabledNotifier);
    };

    match SmtpNotifier::new(mail, business_name) {
        Ok(notifier) => {
            tracing::info!(
                server = %mail.smtp_server,
                port = mail.smtp_port,
                "Confirmation emails enabled"
            );
            Arc::new(notifier)
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid mail settings, confirmation emails disabled");
            Arc::new(DisabledNotifier)
        }
    }
}

/// Enqueue side of the confirmation pipeline
#[derive(Debug, Clone)]
pub struct NotificationService {
    tx: mpsc::Sender<Order>,
}

impl NotificationService {
    /// Create the service and the receiver for [`NotificationWorker::run`]
    pub fn new(buffer_size: usize) -> (Self, mpsc::Receiver<Order>) {
        let (tx, rx) = mpsc::channel(buffer_size);
        (Self { tx }, rx)
    }

    /// Queue a confirmation without waiting; a full or closed queue is logged
    pub fn enqueue(&self, order: Order) {
        match self.tx.try_send(order) {
            Ok(()) => {}
            Err(TrySendError::Full(order)) => {
                tracing::warn!(order_id = %order.id, "Notification queue full, confirmation dropped");
            }
            Err(TrySendError::Closed(order)) => {
                tracing::warn!(order_id = %order.id, "Notification worker stopped, confirmation dropped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::OrderStatus;

    fn order(id: &str) -> Order {
        Order {
            id: id.into(),
            customer_name: "Ada".into(),
            customer_email: "ada@example.com".into(),
            customer_phone: "555-0100".into(),
            items: vec![],
            total_amount: 0.0,
            pickup_time: "noon".into(),
            special_requests: None,
            order_date: Utc::now(),
            status: OrderStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_disabled_notifier_skips() {
        let result = DisabledNotifier.send(&order("a")).await.unwrap();
        assert!(matches!(result, Delivery::Skipped(_)));
    }

    #[test]
    fn test_missing_credentials_disable_mail() {
        // Must not panic or error
        let _ = build_notifier(None, "Test Bakery");
    }

    #[tokio::test]
    async fn test_full_queue_drops_without_blocking() {
        let (service, mut rx) = NotificationService::new(1);
        service.enqueue(order("first"));
        service.enqueue(order("second"));

        assert_eq!(rx.recv().await.unwrap().id, "first");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_queue_is_ignored() {
        let (service, rx) = NotificationService::new(1);
        drop(rx);
        service.enqueue(order("late"));
    }
}
