//! Notification background worker
//!
//! Consumes orders from the mpsc channel and delivers confirmations.
//! Exits once every sender is dropped and the queue is drained.

use shared::models::Order;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::{Delivery, Notifier};

pub struct NotificationWorker {
    notifier: Arc<dyn Notifier>,
}

impl NotificationWorker {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Run until the channel closes
    pub async fn run(self, mut rx: mpsc::Receiver<Order>) {
        tracing::info!("Notification worker started");

        while let Some(order) = rx.recv().await {
            match self.notifier.send(&order).await {
                Ok(Delivery::Sent) => {
                    tracing::info!(order_id = %order.id, to = %order.customer_email, "Confirmation email sent");
                }
                Ok(Delivery::Skipped(reason)) => {
                    tracing::debug!(order_id = %order.id, reason = %reason, "Confirmation email skipped");
                }
                Err(e) => {
                    tracing::error!(order_id = %order.id, error = %e, "Failed to send confirmation email");
                }
            }
        }

        tracing::info!("Notification channel closed, worker stopping");
    }
}
