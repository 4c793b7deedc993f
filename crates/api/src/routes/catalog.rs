//! Route definitions for the read-only catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Actor routes mounted at `/actors`.
///
/// ```text
/// GET    /          -> list_actors (faceted search)
/// GET    /{id}      -> get_actor
/// ```
pub fn actor_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_actors))
        .route("/{id}", get(catalog::get_actor))
}

/// Studio routes mounted at `/studios`.
pub fn studio_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_studios))
        .route("/{id}", get(catalog::get_studio))
}

/// Agency routes mounted at `/agencies`.
pub fn agency_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_agencies))
        .route("/{id}", get(catalog::get_agency))
}
