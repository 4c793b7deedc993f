//! Handlers for simulated realtime chat.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use castline_core::catalog::SubjectRef;
use castline_core::messaging::Attachment;
use castline_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::query::IncludeArchivedParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StartConversationRequest {
    pub subject: SubjectRef,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Serialize)]
pub struct UnreadSummary {
    pub unread: u32,
}

#[derive(Debug, Serialize)]
pub struct MarkReadResult {
    pub marked: usize,
}

#[derive(Debug, Serialize)]
pub struct ArchiveResult {
    pub archived: bool,
}

// ---------------------------------------------------------------------------
// Conversations
// ---------------------------------------------------------------------------

/// Conversations, most recently updated first.
pub async fn list_conversations(
    State(state): State<AppState>,
    Query(params): Query<IncludeArchivedParams>,
) -> AppResult<impl IntoResponse> {
    let conversations = state.gateway.chat.list(params.include_archived).await;
    Ok(Json(DataResponse {
        data: conversations,
    }))
}

/// Open a conversation with a catalog subject, reusing an existing one.
pub async fn start_conversation(
    State(state): State<AppState>,
    Json(body): Json<StartConversationRequest>,
) -> AppResult<impl IntoResponse> {
    let (conversation, created) = state.gateway.chat.start(body.subject).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: conversation })))
}

pub async fn unread_total(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let unread = state.gateway.chat.unread_total().await;
    Ok(Json(DataResponse {
        data: UnreadSummary { unread },
    }))
}

pub async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let conversation = state.gateway.chat.conversation(id).await?;
    Ok(Json(DataResponse { data: conversation }))
}

pub async fn connect(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let conversation = state.gateway.chat.connect(id).await?;
    Ok(Json(DataResponse { data: conversation }))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let marked = state.gateway.chat.mark_read(id).await?;
    Ok(Json(DataResponse {
        data: MarkReadResult { marked },
    }))
}

pub async fn toggle_archive(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let archived = state.gateway.chat.toggle_archive(id).await?;
    Ok(Json(DataResponse {
        data: ArchiveResult { archived },
    }))
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub async fn list_messages(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let messages = state.gateway.chat.messages(id).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// Send a message. The participant's auto-reply arrives later.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SendMessageRequest>,
) -> AppResult<impl IntoResponse> {
    let message = state
        .gateway
        .chat
        .send(id, &body.content, body.attachment)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}
