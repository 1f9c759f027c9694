use bakery_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env and logging
    setup_environment();

    tracing::info!("Bakery server starting...");

    // 2. Configuration
    let config = Config::from_env();
    tracing::info!(environment = %config.environment, "Configuration loaded");

    // 3. Database, services, notification worker
    let (state, notification_worker) = ServerState::initialize(&config).await?;

    // 4. HTTP server until shutdown signal
    let server = Server::with_state(config, state, notification_worker);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    tracing::info!("Bakery server stopped");
    Ok(())
}
