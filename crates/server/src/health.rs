use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::backend::BackendClient;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub api_base_url: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(backend): State<BackendClient>) -> Json<HealthResponse> {
    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        api_base_url: backend.base_url().to_string(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
