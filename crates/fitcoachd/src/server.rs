//! HTTP server for fitcoachd

use crate::config::RelayConfig;
use crate::gemini::GeminiClient;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub gemini: GeminiClient,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            gemini: GeminiClient::new(config)?,
            start_time: Instant::now(),
        })
    }
}

/// Build the router. Split out from `run` so tests can drive the app
/// without binding a socket.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::analysis_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server until shutdown
pub async fn run(config: &RelayConfig, state: AppState) -> Result<()> {
    let app = build_router(Arc::new(state));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Shutdown signal received");
}
