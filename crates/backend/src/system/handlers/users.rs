use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_response::ApiResponse;
use contracts::system::users::{CreateUserDto, UpdateUserDto, UserId};
use serde_json::json;

use crate::shared::app_state::AppState;
use crate::shared::error::{bad_request, parse_path_id};

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> Response {
    match state.users.list_all().await {
        Ok(users) => Json(ApiResponse::success(users)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Response {
    let Ok(Json(dto)) = payload else {
        return bad_request("Invalid JSON format");
    };

    match state.users.create(dto).await {
        Ok(user) => (StatusCode::CREATED, Json(ApiResponse::created(user))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/v1/users/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_path_id(&id, "user") {
        Ok(id) => UserId(id),
        Err(r) => return r,
    };

    match state.users.get_by_id(id).await {
        Ok(user) => Json(ApiResponse::success(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /api/v1/users/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Response {
    let id = match parse_path_id(&id, "user") {
        Ok(id) => UserId(id),
        Err(r) => return r,
    };
    let Ok(Json(dto)) = payload else {
        return bad_request("Invalid JSON format");
    };

    match state.users.update(id, dto).await {
        Ok(user) => Json(ApiResponse::success(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /api/v1/users/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_path_id(&id, "user") {
        Ok(id) => UserId(id),
        Err(r) => return r,
    };

    match state.users.delete(id).await {
        Ok(()) => Json(ApiResponse::success(json!({"message": "User deleted successfully"})))
            .into_response(),
        Err(e) => e.into_response(),
    }
}
