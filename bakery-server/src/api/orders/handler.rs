//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{Order, OrderCreate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Create an order
///
/// Body decoding failures (malformed JSON, missing fields, unknown category)
/// are reported as validation errors.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> AppResult<Json<Order>> {
    let Json(request) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let order = state.orders.create_order(request).await?;
    Ok(Json(order))
}

/// List orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.list_orders().await?;
    Ok(Json(orders))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.orders.get_order(&id).await?;
    Ok(Json(order))
}
