use anyhow::Context;
use bookwell::router::init_router;
use bookwell::state::init_app_state;
use bookwell_config::ServerConfig;
use bookwell_observability::{LoggingConfig, init_logging};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Guards flush the file writers on drop
    let _guards = init_logging(&LoggingConfig::from_env())?;

    let state = init_app_state();
    info!(
        environment = %state.environment.environment,
        elevated_role = %state.role_guard.elevated,
        "Configuration loaded"
    );
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
