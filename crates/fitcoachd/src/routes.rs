//! API routes for fitcoachd

use crate::pipeline;
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitcoach_shared::rpc::{AnalysisRequest, AnalysisResponse, ErrorBody, HealthResponse};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Analysis Routes
// ============================================================================

pub fn analysis_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/analyze", post(analyze))
}

async fn analyze(
    State(state): State<AppStateArc>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, (StatusCode, Json<ErrorBody>)> {
    info!("[Q]  Analysis request received");
    let start = Instant::now();

    match pipeline::run_analysis(&state.gemini, &request).await {
        Ok(response) => {
            info!("[A]  Analysis done in {}ms", start.elapsed().as_millis());
            Ok(Json(response))
        }
        Err(e) => {
            if e.is_upstream() {
                error!("Analysis failed upstream: {}", e);
            } else {
                warn!("Analysis failed: {}", e);
            }
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, Json(ErrorBody::from_error(&e))))
        }
    }
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
