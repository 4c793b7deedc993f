//! Handlers shared by the four request kinds.
//!
//! Every handler is generic over the status type of its kind, so the
//! license, access, collaboration and intro routers reuse the same code and
//! pick their desk through [`RequestDeskKind`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use castline_core::requests::RequestDraft;
use castline_core::types::RecordId;
use castline_gateway::RequestDeskKind;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// The caller's requests of this kind, newest first.
pub async fn list<S: RequestDeskKind>(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let requests = state.gateway.requests::<S>().list().await?;
    Ok(Json(DataResponse { data: requests }))
}

pub async fn get<S: RequestDeskKind>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let request = state.gateway.requests::<S>().get(id).await?;
    Ok(Json(DataResponse { data: request }))
}

/// Submit a draft.
///
/// Pre-check failures return 400 immediately; a scripted upstream failure
/// returns 503 after the simulated latency. Neither creates a record.
pub async fn submit<S: RequestDeskKind>(
    State(state): State<AppState>,
    Json(draft): Json<RequestDraft>,
) -> AppResult<impl IntoResponse> {
    let request = state.gateway.requests::<S>().submit(draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// Move a request one status forward.
pub async fn advance<S: RequestDeskKind>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let transition = state.gateway.requests::<S>().advance(id).await?;
    Ok(Json(DataResponse { data: transition }))
}

/// Withdraw a request. A second withdraw of the same id is a no-op.
pub async fn withdraw<S: RequestDeskKind>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<StatusCode> {
    state.gateway.requests::<S>().withdraw(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// POST /licenses/{id}/token
// ---------------------------------------------------------------------------

/// Issue a usage token for an approved license.
pub async fn issue_token(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let token = state.gateway.tokens.authorize(id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: token })))
}
