//! Handler for the activity journal written by the event journal task.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use castline_core::search::clamp_limit;
use castline_store::repositories::activity::MAX_ACTIVITY_ENTRIES;
use castline_store::ActivityRepo;

use crate::error::AppResult;
use crate::query::ActivityParams;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_ACTIVITY_LIMIT: i64 = 50;

/// Most recent journal entries, newest first.
pub async fn recent_activity(
    State(state): State<AppState>,
    Query(params): Query<ActivityParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(
        params.limit,
        DEFAULT_ACTIVITY_LIMIT,
        MAX_ACTIVITY_ENTRIES as i64,
    );
    let entries = ActivityRepo::recent(&state.gateway.context().store, limit as usize).await?;
    Ok(Json(DataResponse { data: entries }))
}
