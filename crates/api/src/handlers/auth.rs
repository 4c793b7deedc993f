//! Handlers for the mock sign-in session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use castline_core::session::Credentials;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// The signed-in user, or `null`.
pub async fn current_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = state.gateway.auth.current().await?;
    Ok(Json(DataResponse { data: user }))
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<impl IntoResponse> {
    let user = state.gateway.auth.sign_in(credentials).await?;
    Ok(Json(DataResponse { data: user }))
}

pub async fn sign_out(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.gateway.auth.sign_out().await?;
    Ok(StatusCode::NO_CONTENT)
}
