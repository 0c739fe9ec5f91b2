/// Health check API routes
use crate::{
    services::health::{MetricsSnapshot, ReadinessChecks},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: u64,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: ReadinessChecks,
}

/// GET /health - Basic health check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        uptime: state.health.uptime_secs(),
    })
}

/// GET /health/live - Liveness probe
/// Returns 200 as long as the process is serving requests
pub async fn live() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "alive" }))
}

/// GET /health/ready - Readiness probe
/// Returns 200 when every advisory check passes, 503 otherwise
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let checks = state.health.readiness();
    if checks.all_passed() {
        (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready",
                checks,
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not ready",
                checks,
            }),
        )
    }
}

/// GET /health/metrics - Metrics snapshot
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.health.metrics())
}
