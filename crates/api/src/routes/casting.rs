//! Route definitions for casting calls.
//!
//! Mounted at `/casting-calls` in the API route tree.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::casting;
use crate::state::AppState;

/// ```text
/// GET    /                      -> list_calls
/// GET    /{id}                  -> get_call
/// POST   /{id}/application      -> apply
/// DELETE /{id}/application      -> withdraw
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(casting::list_calls))
        .route("/{id}", get(casting::get_call))
        .route(
            "/{id}/application",
            post(casting::apply).delete(casting::withdraw),
        )
}
