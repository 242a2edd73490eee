use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::routes::AppState;
use crate::errors::{ApiError, ApiResult};
use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserId};

fn parse_user_id(raw: &str) -> ApiResult<UserId> {
    raw.parse::<UserId>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid user ID: {}", raw)))
}

fn user_not_found(id: UserId) -> ApiError {
    ApiError::NotFound(format!("User {} not found", id))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateUserRequest>, ApiError>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let fields = request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let user = state.users.create(fields).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a specific user
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_user_id(&raw_id)?;

    state
        .users
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| user_not_found(id))
}

/// Replace a user's name and email
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateUserRequest>, ApiError>,
) -> ApiResult<Json<User>> {
    let id = parse_user_id(&raw_id)?;
    let fields = request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .users
        .update(id, fields)
        .await?
        .map(Json)
        .ok_or_else(|| user_not_found(id))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_user_id(&raw_id)?;

    if state.users.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(user_not_found(id))
    }
}
