pub mod auth;
pub mod casting;
pub mod catalog;
pub mod conversations;
pub mod health;
pub mod onboarding;
pub mod requests;
pub mod vault;

use axum::routing::{get, post};
use axum::Router;
use castline_core::requests::{AccessStatus, CollaborationStatus, IntroStatus};

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/session                                    current user (GET)
/// /auth/sign-in                                    sign in (POST)
/// /auth/sign-out                                   sign out (POST)
///
/// /actors                                          faceted actor search
/// /actors/{id}                                     get
/// /studios, /studios/{id}                          list, get
/// /agencies, /agencies/{id}                        list, get
/// /facets                                          facet option lists
/// /search                                          unified catalog search
///
/// /casting-calls                                   list
/// /casting-calls/{id}                              get
/// /casting-calls/{id}/application                  apply (POST), withdraw (DELETE)
///
/// /licenses                                        list, submit
/// /licenses/{id}                                   get, withdraw
/// /licenses/{id}/advance                           advance status (POST)
/// /licenses/{id}/token                             issue usage token (POST)
/// /access-requests[/{id}[/advance]]                same shape as licenses
/// /collaborations[/{id}[/advance]]                 same shape as licenses
/// /intros[/{id}[/advance]]                         same shape as licenses
///
/// /conversations                                   list, start
/// /conversations/unread                            unread total
/// /conversations/{id}                              get
/// /conversations/{id}/connect                      connect (POST)
/// /conversations/{id}/read                         mark read (POST)
/// /conversations/{id}/archive                      toggle archive (POST)
/// /conversations/{id}/messages                     list, send
///
/// /vault                                           list, upload
/// /vault/{id}                                      delete
///
/// /onboarding                                      get, reset (DELETE)
/// /onboarding/advance|back|complete                wizard steps (POST)
///
/// /contracts/review                                review contract text (POST)
///
/// /activity                                        recent journal entries
/// /actions                                         async action states
/// /actions/{name}/reset                            dismiss success/error (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Mock session.
        .nest("/auth", auth::router())
        // Catalog browsing and search.
        .nest("/actors", catalog::actor_router())
        .nest("/studios", catalog::studio_router())
        .nest("/agencies", catalog::agency_router())
        .route("/facets", get(handlers::catalog::list_facets))
        .route("/search", get(handlers::catalog::search_all))
        // Casting calls and applications.
        .nest("/casting-calls", casting::router())
        // Request lifecycles, one router per kind.
        .nest("/licenses", requests::license_router())
        .nest("/access-requests", requests::router::<AccessStatus>())
        .nest("/collaborations", requests::router::<CollaborationStatus>())
        .nest("/intros", requests::router::<IntroStatus>())
        // Chat.
        .nest("/conversations", conversations::router())
        // Asset vault.
        .nest("/vault", vault::router())
        // Onboarding wizard.
        .nest("/onboarding", onboarding::router())
        // Contract review.
        .route(
            "/contracts/review",
            post(handlers::contracts::review_contract),
        )
        // Activity journal.
        .route("/activity", get(handlers::activity::recent_activity))
        // Async action states.
        .route("/actions", get(handlers::actions::list_actions))
        .route(
            "/actions/{name}/reset",
            post(handlers::actions::reset_action),
        )
}
