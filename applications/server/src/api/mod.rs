/// API route modules and router assembly
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;

pub mod health;
pub mod users;

/// Request bodies above this size are rejected before parsing
const MAX_BODY_BYTES: usize = 10 * 1024;

/// Build the service router: user CRUD under /api, health probes under
/// /health, a root service-info endpoint, and a JSON 404 fallback.
pub fn router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user));

    let health_routes = Router::new()
        .route("/", get(health::health))
        .route("/live", get(health::live))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    Router::new()
        .nest("/api", user_routes)
        .nest("/health", health_routes)
        .route("/", get(service_info))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// GET / - Service identification
async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "roster",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}
