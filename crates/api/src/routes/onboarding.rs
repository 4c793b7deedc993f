//! Route definitions for the onboarding wizard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Onboarding routes mounted at `/onboarding`.
///
/// ```text
/// GET    /                      -> get_state
/// DELETE /                      -> reset
/// POST   /advance               -> advance_step
/// POST   /back                  -> go_back
/// POST   /complete              -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(onboarding::get_state).delete(onboarding::reset))
        .route("/advance", post(onboarding::advance_step))
        .route("/back", post(onboarding::go_back))
        .route("/complete", post(onboarding::complete))
}
