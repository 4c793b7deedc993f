//! Handler for the simulated contract review.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewContractRequest {
    pub text: String,
}

/// Flag risky clauses in a pasted contract.
pub async fn review_contract(
    State(state): State<AppState>,
    Json(body): Json<ReviewContractRequest>,
) -> AppResult<impl IntoResponse> {
    let review = state.gateway.contracts.review(&body.text).await?;
    Ok(Json(DataResponse { data: review }))
}
