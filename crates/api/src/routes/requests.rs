//! Route definitions for license, access, collaboration and intro requests.

use axum::routing::{get, post};
use axum::Router;
use castline_core::requests::LicenseStatus;
use castline_gateway::RequestDeskKind;

use crate::handlers::requests;
use crate::state::AppState;

/// Routes for one request kind, selected by its status type.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> submit
/// GET    /{id}                  -> get
/// DELETE /{id}                  -> withdraw
/// POST   /{id}/advance          -> advance
/// ```
pub fn router<S: RequestDeskKind>() -> Router<AppState> {
    Router::new()
        .route("/", get(requests::list::<S>).post(requests::submit::<S>))
        .route(
            "/{id}",
            get(requests::get::<S>).delete(requests::withdraw::<S>),
        )
        .route("/{id}/advance", post(requests::advance::<S>))
}

/// License routes: the shared request routes plus token issuance.
///
/// ```text
/// POST   /{id}/token            -> issue_token
/// ```
pub fn license_router() -> Router<AppState> {
    router::<LicenseStatus>().route("/{id}/token", post(requests::issue_token))
}
