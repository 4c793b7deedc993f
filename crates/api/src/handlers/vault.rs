//! Handlers for the asset vault.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use castline_core::types::RecordId;
use castline_core::vault::AssetUpload;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = state.gateway.vault.list().await?;
    Ok(Json(DataResponse { data: assets }))
}

/// Register an uploaded asset. Only metadata is stored.
pub async fn upload_asset(
    State(state): State<AppState>,
    Json(upload): Json<AssetUpload>,
) -> AppResult<impl IntoResponse> {
    let asset = state.gateway.vault.upload(upload).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// Delete an asset. Deleting an unknown id is a no-op.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<StatusCode> {
    let removed = state.gateway.vault.delete(id).await?;
    tracing::debug!(asset_id = %id, removed, "Vault delete");
    Ok(StatusCode::NO_CONTENT)
}
