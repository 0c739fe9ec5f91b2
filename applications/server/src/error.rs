/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{validation::Violation, RosterError};
use serde_json::json;
use std::sync::OnceLock;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

// Set once at startup; 500 bodies stay generic unless enabled.
static EXPOSE_ERROR_DETAIL: OnceLock<bool> = OnceLock::new();

/// Echo internal error detail in 500 bodies. Called once at startup when
/// the service runs in development mode.
pub fn expose_error_detail() {
    let _ = EXPOSE_ERROR_DETAIL.set(true);
}

fn error_detail_exposed() -> bool {
    EXPOSE_ERROR_DETAIL.get().copied().unwrap_or(false)
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Validation failed")]
    Validation(Vec<Violation>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RosterError> for ServerError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::UserNotFound(_) => ServerError::NotFound("User not found".to_string()),
            RosterError::DuplicateEmail(_) => {
                ServerError::Conflict("Email already exists".to_string())
            }
        }
    }
}

impl From<Violation> for ServerError {
    fn from(violation: Violation) -> Self {
        ServerError::Validation(vec![violation])
    }
}

impl From<Vec<Violation>> for ServerError {
    fn from(violations: Vec<Violation>) -> Self {
        ServerError::Validation(violations)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, payload) = match self {
            ServerError::Validation(violations) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": violations }))
            }
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ServerError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Configuration error" }),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = if error_detail_exposed() {
                    json!({ "error": "Internal Server Error", "message": msg })
                } else {
                    json!({ "error": "Internal Server Error" })
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(payload)).into_response()
    }
}
