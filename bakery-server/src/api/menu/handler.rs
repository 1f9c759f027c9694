//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::MenuItem;

use crate::core::ServerState;
use crate::utils::AppResult;

/// List all menu items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.catalog.list_all().await?;
    Ok(Json(items))
}

/// List menu items by category
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.catalog.list_by_category(&category).await?;
    Ok(Json(items))
}
