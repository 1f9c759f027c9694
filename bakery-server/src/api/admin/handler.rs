//! Admin API Handlers

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use shared::models::{AdminStats, Order};

use crate::core::ServerState;
use crate::services::export::write_csv;
use crate::utils::AppResult;
use crate::utils::time::file_stamp;

/// All orders, same listing as `GET /orders`
pub async fn list_orders(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.list_orders().await?;
    Ok(Json(orders))
}

/// Download every order as CSV, newest first
pub async fn export_orders(State(state): State<ServerState>) -> AppResult<Response> {
    let orders = state.orders.all_orders().await?;
    let body = write_csv(&orders)?;

    let disposition = format!(
        "attachment; filename=\"orders_export_{}.csv\"",
        file_stamp(Utc::now())
    );
    tracing::info!(orders = orders.len(), "Orders exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// Dashboard statistics
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<AdminStats>> {
    let stats = state.analytics.admin_stats().await?;
    Ok(Json(stats))
}
