use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::vault;
use crate::state::AppState;

/// Vault routes mounted at `/vault`.
///
/// ```text
/// GET    /                      -> list_assets
/// POST   /                      -> upload_asset
/// DELETE /{id}                  -> delete_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vault::list_assets).post(vault::upload_asset))
        .route("/{id}", delete(vault::delete_asset))
}
