//! Order API Module
//!
//! Orders can be created and read; there is no update or delete.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router(prefix: &str) -> Router<ServerState> {
    Router::new().nest(&format!("{prefix}/orders"), routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
}
