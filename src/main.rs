mod domain;
mod error;
mod store;
mod service;

mod api;
mod system;

mod config;
mod logging;

#[cfg(test)]
mod mock_stores;

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::logging::setup_tracing;
use crate::system::OrderSystem;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    let config = AppConfig::load(&env);

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    info!(env = %env, "Starting application with complete order system");

    // Create the entire order system (wires stores into services)
    let system = Arc::new(OrderSystem::new());
    if config.seed_demo {
        system.seed_demo().await?;
    }

    let app = api::router(system);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Application shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
