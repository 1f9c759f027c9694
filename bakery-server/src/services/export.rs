//! Order export
//!
//! [`ExportRow`] flattens an order into display strings; [`write_csv`]
//! encodes the rows. One row per order, header first.

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::Order;

/// One exported order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Order ID")]
    pub order_id: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Email")]
    pub customer_email: String,
    #[serde(rename = "Phone")]
    pub customer_phone: String,
    #[serde(rename = "Items")]
    pub items: String,
    #[serde(rename = "Total")]
    pub total: String,
    #[serde(rename = "Pickup Time")]
    pub pickup_time: String,
    #[serde(rename = "Special Requests")]
    pub special_requests: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl ExportRow {
    pub fn from_order(order: &Order) -> Self {
        let items = order
            .items
            .iter()
            .map(|item| format!("{} ×{}", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            order_id: order.short_id().to_string(),
            date: order.order_date.format("%Y-%m-%d %H:%M").to_string(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            items,
            total: format!("{:.2}", order.total_amount),
            pickup_time: order.pickup_time.clone(),
            special_requests: order.special_requests.clone().unwrap_or_default(),
            // Legacy records without a status already decode as pending
            status: order.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv buffer error: {0}")]
    Buffer(String),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::with_message(ErrorCode::ExportFailed, err.to_string())
    }
}

/// Encode orders as CSV with a header row
pub fn write_csv(orders: &[Order]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if orders.is_empty() {
        // serde-driven headers are only written with the first record
        writer.write_record([
            "Order ID",
            "Date",
            "Customer Name",
            "Email",
            "Phone",
            "Items",
            "Total",
            "Pickup Time",
            "Special Requests",
            "Status",
        ])?;
    }
    for order in orders {
        writer.serialize(ExportRow::from_order(order))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}
