use anyhow::Context;
use tracing_subscriber::EnvFilter;

use latecomer_api::app::{app, AppState};
use latecomer_api::config::{AppConfig, Environment};
use latecomer_api::seatable::SeaTableClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SEATABLE_BASE_URL, SEATABLE_API_TOKEN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!("Starting Late Comer API in {:?} mode", config.environment);

    if config.environment == Environment::Production && config.security.allows_any_origin() {
        tracing::warn!("CORS allows any origin; set SECURITY_CORS_ORIGINS for production");
    }

    let store = SeaTableClient::new(config.seatable.clone()).context("failed to build SeaTable client")?;
    tracing::info!(
        base_url = %config.seatable.base_url,
        users = %config.seatable.users_table,
        entries = %config.seatable.entries_table,
        "SeaTable configured"
    );

    let router = app(AppState::new(store), &config);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Late Comer API listening on http://{}/api", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
