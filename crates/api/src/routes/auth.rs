//! Route definitions for the mock session.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes mounted at `/auth`.
///
/// ```text
/// GET    /session               -> current_session
/// POST   /sign-in               -> sign_in
/// POST   /sign-out              -> sign_out
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", get(auth::current_session))
        .route("/sign-in", post(auth::sign_in))
        .route("/sign-out", post(auth::sign_out))
}
