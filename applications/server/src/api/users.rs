/// User API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roster_core::{
    types::User,
    validation::{parse_user_id, validate_create, validate_update},
};
use serde::{Deserialize, Serialize};

/// Create/update request body. Fields arrive optional so an absent email or
/// name surfaces as a field violation rather than a deserialization error,
/// and the role stays a raw string judged by the validator.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub count: usize,
    pub users: Vec<User>,
}

/// GET /api/users
/// List all users
pub async fn list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    let users = state.store.list().await;
    Json(UserListResponse {
        count: users.len(),
        users,
    })
}

/// GET /api/users/:id
/// Get user by ID
pub async fn get_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>> {
    let user_id = parse_user_id(&id)?;
    let user = state.store.get(&user_id).await?;
    Ok(Json(user))
}

/// POST /api/users
/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let payload = validate_create(req.email.as_deref(), req.name.as_deref(), req.role.as_deref())?;
    let user = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/:id
/// Update an existing user
pub async fn update_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<Json<User>> {
    let user_id = parse_user_id(&id)?;
    let payload = validate_update(req.email.as_deref(), req.name.as_deref(), req.role.as_deref())?;
    let user = state.store.update(&user_id, payload).await?;
    Ok(Json(user))
}

/// DELETE /api/users/:id
/// Delete a user
pub async fn delete_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    let user_id = parse_user_id(&id)?;
    state.store.delete(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
