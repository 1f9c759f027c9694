//! Analytics API Module

use axum::{Json, Router, extract::State, routing::get};
use shared::models::AnalyticsSummary;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router(prefix: &str) -> Router<ServerState> {
    Router::new().route(&format!("{prefix}/analytics"), get(summary))
}

/// Order count, revenue and the five most ordered items
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<AnalyticsSummary>> {
    let summary = state.analytics.summary().await?;
    Ok(Json(summary))
}
