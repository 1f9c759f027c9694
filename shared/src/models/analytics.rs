//! Analytics response models

use super::order::Order;
use serde::{Deserialize, Serialize};

/// Item name with its cumulative ordered quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopularItem {
    pub name: String,
    pub count: i64,
}

/// `GET /analytics` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    pub total_orders: u64,
    /// At most five entries, highest quantity first
    pub popular_items: Vec<PopularItem>,
    /// Sum of all order totals, 0 when there are no orders
    pub total_revenue: f64,
}

/// `GET /admin/stats` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminStats {
    pub total_orders: u64,
    /// Orders created since 00:00 UTC today
    pub today_orders: u64,
    pub today_revenue: f64,
    /// Five most recent orders, newest first
    pub recent_orders: Vec<Order>,
}
