//! Server Implementation
//!
//! HTTP listener startup and graceful shutdown

use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::api::build_app;
use crate::core::{Config, Result, ServerError, ServerState};

/// How long shutdown waits for queued confirmation emails
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
    notification_worker: JoinHandle<()>,
}

impl Server {
    pub fn with_state(
        config: Config,
        state: ServerState,
        notification_worker: JoinHandle<()>,
    ) -> Self {
        Self {
            config,
            state,
            notification_worker,
        }
    }

    /// Serve until Ctrl+C / SIGTERM, then drain pending notifications
    pub async fn run(self) -> Result<()> {
        let Self {
            config,
            state,
            notification_worker,
        } = self;

        if !config.api_prefix.starts_with('/') {
            return Err(ServerError::Config(format!(
                "API_PREFIX must start with '/', got {:?}",
                config.api_prefix
            )));
        }

        let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            "Bakery server listening on {} (prefix {})",
            addr,
            config.api_prefix
        );

        // The router owns the only remaining state, and with it the
        // notification sender; dropping it lets the worker finish.
        let app = build_app(state);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped, draining notifications");
        match tokio::time::timeout(DRAIN_TIMEOUT, notification_worker).await {
            Ok(Ok(())) => tracing::info!("Notification worker finished"),
            Ok(Err(e)) => tracing::error!(error = %e, "Notification worker panicked"),
            Err(_) => tracing::warn!("Timed out waiting for notification worker"),
        }

        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
