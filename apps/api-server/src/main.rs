//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use anyhow::Context;

use api_server::config::AppConfig;
use api_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    let mut server = api_server::start(&config)
        .await
        .context("failed to start Blog API server")?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("Shutdown signal received");

    server.stop().await?;
    Ok(())
}
