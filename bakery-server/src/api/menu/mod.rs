//! Menu API Module
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /menu | GET | full menu (seeded on first read) |
//! | /menu/{category} | GET | items of one category, empty for unknown categories |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router(prefix: &str) -> Router<ServerState> {
    Router::new().nest(&format!("{prefix}/menu"), routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{category}", get(handler::list_by_category))
}
