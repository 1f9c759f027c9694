//! HTTP API
//!
//! One module per resource, each exposing `router()`. Everything except
//! `/health` lives under `API_PREFIX` (default `/api`).
//!
//! | Path | Method | Module |
//! |------|--------|--------|
//! | / | GET | welcome message |
//! | /menu, /menu/{category} | GET | [`menu`] |
//! | /orders, /orders/{id} | GET, POST | [`orders`] |
//! | /analytics | GET | [`analytics`] |
//! | /admin/orders, /admin/orders/export, /admin/stats | GET | [`admin`] |
//! | /health | GET | [`health`] |

pub mod admin;
pub mod analytics;
pub mod health;
pub mod menu;
pub mod orders;

use axum::{Json, Router, extract::State, middleware, routing::get};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::request_log::log_request;

#[derive(Serialize)]
pub struct WelcomeResponse {
    message: String,
}

pub async fn welcome(State(state): State<ServerState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {} API", state.config.business_name),
    })
}

/// Welcome message at both `{prefix}` and `{prefix}/`
fn welcome_router(prefix: &str) -> Router<ServerState> {
    if prefix.is_empty() {
        return Router::new().route("/", get(welcome));
    }
    Router::new()
        .route(prefix, get(welcome))
        .route(&format!("{prefix}/"), get(welcome))
}

/// Build the Axum router (without state)
pub fn build_router(api_prefix: &str) -> Router<ServerState> {
    let prefix = api_prefix.trim_end_matches('/');

    Router::<ServerState>::new()
        .merge(health::router())
        .merge(welcome_router(prefix))
        .merge(menu::router(prefix))
        .merge(orders::router(prefix))
        .merge(analytics::router(prefix))
        .merge(admin::router(prefix))
}

/// Full application: routes, state and tower layers
pub fn build_app(state: ServerState) -> Router {
    build_router(&state.config.api_prefix)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}
