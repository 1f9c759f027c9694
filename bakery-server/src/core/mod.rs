//! Core module - configuration, state and server lifecycle
//!
//! - [`Config`] - environment configuration
//! - [`ServerState`] - shared service handles
//! - [`Server`] - HTTP listener
//! - [`ServerError`] - startup errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, MailConfig};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
