//! Order Model

use super::menu_item::MenuCategory;
use super::serde_helpers::null_as_default;
use crate::error::{AppError, AppResult, ErrorCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
///
/// New orders are always `Pending`; no transition is exposed by the API.
/// Records written before the field existed deserialize as `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Cart line item, a snapshot of name and price at order time
///
/// Not checked against the live menu: the client-supplied price is stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Menu item reference (String ID)
    pub id: String,
    pub name: String,
    /// Unit price in currency unit
    pub price: f64,
    pub quantity: i32,
    pub category: MenuCategory,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub items: Vec<CartItem>,
    /// Total amount in currency unit (client-computed, stored as-is)
    pub total_amount: f64,
    /// Free-form pickup time, e.g. "Tomorrow 9:00"
    pub pickup_time: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<CartItem>,
    /// Total amount in currency unit
    pub total_amount: f64,
    pub pickup_time: String,
    #[serde(default)]
    pub special_requests: Option<String>,
    /// Creation time, assigned by the server
    pub order_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: OrderStatus,
}

impl Order {
    /// First 8 characters of the id, for receipts and emails
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Maximum unit price per item
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum quantity per line item
pub const MAX_QUANTITY: i32 = 9999;
/// Maximum order total
pub const MAX_TOTAL_AMOUNT: f64 = 1_000_000.0;

fn require_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(())
}

/// Amounts must be finite, non-negative and at most `max`
fn require_amount(value: f64, max: f64, field: &str) -> AppResult<()> {
    let message = if !value.is_finite() || value < 0.0 {
        format!("{} must be a non-negative number, got {}", field, value)
    } else if value > max {
        format!("{} exceeds maximum allowed ({}), got {}", field, max, value)
    } else {
        return Ok(());
    };
    Err(AppError::with_message(ErrorCode::OrderInvalidAmount, message).with_detail("field", field))
}

impl CartItem {
    fn validate(&self, index: usize) -> AppResult<()> {
        require_text(&self.id, &format!("items[{}].id", index))?;
        require_text(&self.name, &format!("items[{}].name", index))?;
        if !(1..=MAX_QUANTITY).contains(&self.quantity) {
            return Err(AppError::with_message(
                ErrorCode::OrderInvalidQuantity,
                format!(
                    "quantity must be between 1 and {}, got {}",
                    MAX_QUANTITY, self.quantity
                ),
            )
            .with_detail("field", format!("items[{}].quantity", index)));
        }
        require_amount(self.price, MAX_PRICE, &format!("items[{}].price", index))
    }
}

impl OrderCreate {
    /// Check the request before anything is written
    ///
    /// Returns the first failing rule: required customer fields, then the
    /// item list, then each item, then the total.
    pub fn validate(&self) -> AppResult<()> {
        require_text(&self.customer_name, "customer_name")?;
        require_text(&self.customer_email, "customer_email")?;
        require_text(&self.customer_phone, "customer_phone")?;
        require_text(&self.pickup_time, "pickup_time")?;

        if self.items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty).with_detail("field", "items"));
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate(index)?;
        }

        require_amount(self.total_amount, MAX_TOTAL_AMOUNT, "total_amount")
    }

    /// Materialize the request into a pending order
    pub fn into_order(self, id: String, order_date: DateTime<Utc>) -> Order {
        Order {
            id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            items: self.items,
            total_amount: self.total_amount,
            pickup_time: self.pickup_time,
            special_requests: self.special_requests,
            order_date,
            status: OrderStatus::Pending,
        }
    }
}
