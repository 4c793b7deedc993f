//! Route definitions for simulated chat.
//!
//! Mounted at `/conversations` in the API route tree.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::conversations;
use crate::state::AppState;

/// ```text
/// GET    /                      -> list_conversations (?include_archived)
/// POST   /                      -> start_conversation
/// GET    /unread                -> unread_total
/// GET    /{id}                  -> get_conversation
/// POST   /{id}/connect          -> connect
/// POST   /{id}/read             -> mark_read
/// POST   /{id}/archive          -> toggle_archive
/// GET    /{id}/messages         -> list_messages
/// POST   /{id}/messages         -> send_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(conversations::list_conversations).post(conversations::start_conversation),
        )
        .route("/unread", get(conversations::unread_total))
        .route("/{id}", get(conversations::get_conversation))
        .route("/{id}/connect", post(conversations::connect))
        .route("/{id}/read", post(conversations::mark_read))
        .route("/{id}/archive", post(conversations::toggle_archive))
        .route(
            "/{id}/messages",
            get(conversations::list_messages).post(conversations::send_message),
        )
}
