//! Analytics Service
//!
//! Aggregates are recomputed from every stored order on each call. Order
//! volume for a single shop is small, so there is no cache or running total.

use chrono::{DateTime, Utc};
use shared::error::AppResult;
use shared::models::{AdminStats, AnalyticsSummary, Order, PopularItem};
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::OrderStore;
use crate::services::money::sum_amounts;
use crate::services::orders::sort_newest_first;
use crate::utils::time::start_of_day_utc;

/// Entries in `popular_items`
pub const POPULAR_ITEMS_LIMIT: usize = 5;
/// Entries in `recent_orders`
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// Top item names by total quantity
///
/// Ties on quantity are ordered by name, ascending.
pub fn popular_items(orders: &[Order], limit: usize) -> Vec<PopularItem> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for item in orders.iter().flat_map(|o| &o.items) {
        *counts.entry(item.name.as_str()).or_insert(0) += i64::from(item.quantity);
    }

    let mut ranked: Vec<PopularItem> = counts
        .into_iter()
        .map(|(name, count)| PopularItem {
            name: name.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}

pub fn summarize(orders: &[Order]) -> AnalyticsSummary {
    AnalyticsSummary {
        total_orders: orders.len() as u64,
        popular_items: popular_items(orders, POPULAR_ITEMS_LIMIT),
        total_revenue: sum_amounts(orders.iter().map(|o| o.total_amount)),
    }
}

/// Dashboard figures; "today" starts at 00:00 UTC of `now`
pub fn admin_stats(mut orders: Vec<Order>, now: DateTime<Utc>) -> AdminStats {
    let day_start = start_of_day_utc(now);
    let today: Vec<&Order> = orders
        .iter()
        .filter(|o| o.order_date >= day_start)
        .collect();
    let today_orders = today.len() as u64;
    let today_revenue = sum_amounts(today.iter().map(|o| o.total_amount));

    let total_orders = orders.len() as u64;
    sort_newest_first(&mut orders);
    orders.truncate(RECENT_ORDERS_LIMIT);

    AdminStats {
        total_orders,
        today_orders,
        today_revenue,
        recent_orders: orders,
    }
}

#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn OrderStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn summary(&self) -> AppResult<AnalyticsSummary> {
        let orders = self.store.all_orders().await?;
        Ok(summarize(&orders))
    }

    pub async fn admin_stats(&self) -> AppResult<AdminStats> {
        let orders = self.store.all_orders().await?;
        Ok(admin_stats(orders, Utc::now()))
    }
}
