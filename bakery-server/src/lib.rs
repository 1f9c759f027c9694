//! Bakery Server - order and menu API for a bakery/café storefront
//!
//! # Architecture
//!
//! - **Catalog** (`services::catalog`): menu reads, seeds a fixed sample menu on first read
//! - **Orders** (`services::orders`): validated, append-only order records
//! - **Analytics** (`services::analytics`): revenue, popularity, today's figures
//! - **Notifications** (`services::notification`): confirmation emails off the request path
//! - **Export** (`services::export`): CSV download of all orders
//! - **Database** (`db`): embedded SurrealDB, or an in-memory store for tests
//!
//! # Layout
//!
//! ```text
//! bakery-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── db/            # store traits, SurrealDB + memory stores, seed menu
//! ├── services/      # business logic
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, time helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};

/// Load `.env` and initialize logging
///
/// Reads only the logging variables; the rest of the configuration is
/// loaded afterwards so that problems there get logged.
pub fn setup_environment() {
    // A missing .env file is normal outside development
    let dotenv_result = dotenvy::dotenv();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let log_dir = std::env::var("LOG_DIR").ok();
    let json = std::env::var("ENVIRONMENT").is_ok_and(|e| e == "production");
    utils::logger::init_logger(&log_level, json, log_dir.as_deref());

    if let Ok(path) = dotenv_result {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }
}
