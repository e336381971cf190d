//! Fitcoach Daemon - fitness analysis relay.
//!
//! Accepts analysis requests over HTTP, picks a usable generative model
//! from the upstream catalog, and relays a coaching prompt under timeout
//! and retry discipline.

use anyhow::{Context, Result};
use fitcoachd::config::RelayConfig;
use fitcoachd::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("[BOOT] fitcoachd v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = RelayConfig::from_env().context("Failed to load configuration")?;
    info!("[BOOT] Config loaded");

    let state = AppState::new(&config).context("Failed to build application state")?;

    info!("[READY] fitcoachd operational");
    server::run(&config, state).await.context("HTTP server error")?;

    info!("Shutting down gracefully");
    Ok(())
}
