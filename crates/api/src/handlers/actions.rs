//! Handlers exposing the gateway's async action states.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// `idle` / `loading` / `success` / `error` for every tracked action.
pub async fn list_actions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let states: BTreeMap<_, _> = state.gateway.action_states().into_iter().collect();
    Ok(Json(DataResponse { data: states }))
}

/// Dismiss a finished action's `success` or `error` state.
pub async fn reset_action(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let tracker = state.gateway.tracker(&name).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown action '{name}'"))
    })?;
    tracker.reset();
    Ok(Json(DataResponse {
        data: tracker.state(),
    }))
}
