//! Handlers for the onboarding wizard.
//!
//! The wizard has a single persisted state per store; every handler returns
//! the state after the operation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

pub async fn get_state(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let onboarding = state.gateway.onboarding.state().await?;
    Ok(Json(DataResponse { data: onboarding }))
}

/// Merge step data and move one step forward.
pub async fn advance_step(
    State(state): State<AppState>,
    Json(step_data): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let onboarding = state.gateway.onboarding.advance(step_data).await?;
    Ok(Json(DataResponse { data: onboarding }))
}

pub async fn go_back(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let onboarding = state.gateway.onboarding.back().await?;
    Ok(Json(DataResponse { data: onboarding }))
}

pub async fn complete(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let onboarding = state.gateway.onboarding.complete().await?;
    Ok(Json(DataResponse { data: onboarding }))
}

pub async fn reset(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let onboarding = state.gateway.onboarding.reset().await?;
    Ok(Json(DataResponse { data: onboarding }))
}
