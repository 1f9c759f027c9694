use thiserror::Error;

/// Startup and lifecycle errors
///
/// Request-level failures use [`shared::error::AppError`]; this type only
/// covers what can stop the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
