//! Handlers for casting calls and the user's applications to them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use castline_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// All casting calls with the caller's `applied` flag filled in.
pub async fn list_calls(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let calls = state.gateway.casting.list().await?;
    Ok(Json(DataResponse { data: calls }))
}

pub async fn get_call(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let call = state.gateway.casting.get(id).await?;
    Ok(Json(DataResponse { data: call }))
}

// ---------------------------------------------------------------------------
// POST /casting-calls/{id}/application
// ---------------------------------------------------------------------------

/// Apply to a casting call. Applying twice is a conflict.
pub async fn apply(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let call = state.gateway.casting.apply(id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: call })))
}

// ---------------------------------------------------------------------------
// DELETE /casting-calls/{id}/application
// ---------------------------------------------------------------------------

/// Withdraw an application. Withdrawing one that does not exist is a no-op.
pub async fn withdraw(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = state.gateway.casting.withdraw(id).await?;
    tracing::debug!(casting_call_id = id, removed, "Casting application withdrawn");
    Ok(StatusCode::NO_CONTENT)
}
