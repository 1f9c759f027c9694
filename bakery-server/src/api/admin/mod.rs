//! Admin API Module
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /admin/orders | GET | all orders, newest first |
//! | /admin/orders/export | GET | CSV download of all orders |
//! | /admin/stats | GET | totals, today's figures, recent orders |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router(prefix: &str) -> Router<ServerState> {
    Router::new().nest(&format!("{prefix}/admin"), routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list_orders))
        .route("/orders/export", get(handler::export_orders))
        .route("/stats", get(handler::stats))
}
