//! Fulfillment webhook server entry point.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use fulfillment_webhook::{
    adapters::http::build_app,
    application::{
        handlers::{DoubleHandler, DOUBLE_INTENT},
        IntentRegistry,
    },
    config::{AppConfig, ConfigError},
    telemetry::{self, TelemetryError},
};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    telemetry::init(&config.server)?;

    let registry = Arc::new(IntentRegistry::new());
    registry.register(DOUBLE_INTENT, Arc::new(DoubleHandler::new()));

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let app = build_app(&config, Arc::clone(&registry));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %addr,
        path = %config.webhook.path,
        intents = ?registry.intents(),
        "fulfillment webhook listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
