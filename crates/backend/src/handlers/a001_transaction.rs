use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_transaction::aggregate::{CreateTransactionDto, TransactionId};
use contracts::shared::api_response::ApiResponse;
use contracts::system::users::UserId;

use crate::shared::app_state::AppState;
use crate::shared::error::{bad_request, parse_path_id};

/// Создатель транзакции, пока нет аутентификации
pub const PLACEHOLDER_CREATOR_ID: UserId = UserId(1);

/// POST /api/v1/transactions
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionDto>, JsonRejection>,
) -> Response {
    let Json(dto) = match payload {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Rejected transaction payload: {}", e);
            return bad_request("Invalid JSON format");
        }
    };

    match state.transactions.create(PLACEHOLDER_CREATOR_ID, dto).await {
        Ok(tx) => (StatusCode::CREATED, Json(ApiResponse::created(tx))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/v1/transactions/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_path_id(&id, "transaction") {
        Ok(id) => TransactionId(id),
        Err(r) => return r,
    };

    match state.transactions.get_by_id(id).await {
        Ok(tx) => Json(ApiResponse::success(tx)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/v1/users/:id/transactions
pub async fn list_by_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let user_id = match parse_path_id(&id, "user") {
        Ok(id) => UserId(id),
        Err(r) => return r,
    };

    match state.transactions.list_by_user(user_id).await {
        Ok(list) => Json(ApiResponse::success(list)).into_response(),
        Err(e) => e.into_response(),
    }
}
