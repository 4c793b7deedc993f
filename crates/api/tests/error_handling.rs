//! Tests for the mapping of domain and gateway errors onto HTTP responses.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use castline_api::error::AppError;
use castline_core::error::CoreError;
use castline_gateway::GatewayError;
use castline_store::StoreError;
use http_body_util::BodyExt;

async fn status_and_body(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, json) = status_and_body(AppError::Core(CoreError::NotFound {
        entity: "actor",
        id: 42,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "actor with id 42 not found");
}

#[tokio::test]
async fn record_not_found_maps_to_404() {
    let id = uuid::Uuid::new_v4();
    let (status, json) = status_and_body(AppError::Core(CoreError::RecordNotFound {
        entity: "request",
        id,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], format!("request with id {id} not found"));
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) =
        status_and_body(AppError::Core(CoreError::Validation("bad".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad");
}

#[tokio::test]
async fn conflict_and_unauthorized_map_to_409_and_401() {
    let (status, _) = status_and_body(AppError::Core(CoreError::Conflict("dup".into()))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) =
        status_and_body(AppError::Core(CoreError::Unauthorized("no".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        status_and_body(AppError::Core(CoreError::Internal("secret detail".into()))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn gateway_busy_maps_to_409() {
    let (status, json) = status_and_body(GatewayError::Busy("license").into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "BUSY");
}

#[tokio::test]
async fn gateway_failure_maps_to_503() {
    let (status, json) =
        status_and_body(GatewayError::Failed("Simulated failure".into()).into()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "UPSTREAM_FAILED");
    assert_eq!(json["error"], "Simulated failure");
}

#[tokio::test]
async fn store_errors_carrying_domain_errors_keep_their_status() {
    let err: AppError = StoreError::Core(CoreError::Conflict("taken".into())).into();
    assert_matches!(err, AppError::Core(CoreError::Conflict(_)));

    let (status, _) = status_and_body(err).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, json) = status_and_body(AppError::BadRequest("nope".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}
