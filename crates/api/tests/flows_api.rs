//! Integration tests for session, vault, onboarding, contracts, chat,
//! action states and the activity journal.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use castline_events::EventJournal;
use castline_store::Store;
use common::{body_json, delete, get, post, post_json};
use serde_json::json;
use tokio_util::sync::CancellationToken;

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sign_in_then_sign_out() {
    let app = common::build_test_app();

    let session = body_json(get(app.clone(), "/api/v1/auth/session").await).await;
    assert!(session["data"].is_null());

    let response = post_json(
        app.clone(),
        "/api/v1/auth/sign-in",
        json!({ "email": " Maya@Example.com ", "password": "hunter2hunter2", "role": "studio" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["data"]["email"], "maya@example.com");
    assert_eq!(user["data"]["display_name"], "Maya");
    assert_eq!(user["data"]["role"], "studio");

    let session = body_json(get(app.clone(), "/api/v1/auth/session").await).await;
    assert_eq!(session["data"]["email"], "maya@example.com");

    let response = post(app.clone(), "/api/v1/auth/sign-out").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let session = body_json(get(app, "/api/v1/auth/session").await).await;
    assert!(session["data"].is_null());
}

#[tokio::test]
async fn short_password_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/auth/sign-in",
        json!({ "email": "maya@example.com", "password": "short" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn error_in_email_fails_sign_in() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/auth/sign-in",
        json!({ "email": "error@example.com", "password": "long-enough" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let session = body_json(get(app, "/api/v1/auth/session").await).await;
    assert!(session["data"].is_null());
}

// ---------------------------------------------------------------------------
// Vault
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_list_and_delete_asset() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/vault",
        json!({ "name": "Demo reel", "kind": "voice", "size_bytes": 1024 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let asset = body_json(response).await["data"].clone();
    assert_eq!(asset["protected"], true);

    let list = body_json(get(app.clone(), "/api/v1/vault").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let uri = format!("/api/v1/vault/{}", asset["id"].as_str().unwrap());
    assert_eq!(delete(app.clone(), &uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(delete(app.clone(), &uri).await.status(), StatusCode::NO_CONTENT);

    let list = body_json(get(app, "/api/v1/vault").await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_asset_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/vault",
        json!({ "name": "Blank", "kind": "headshot", "size_bytes": 0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn onboarding_walkthrough() {
    let app = common::build_test_app();

    let state = body_json(get(app.clone(), "/api/v1/onboarding").await).await;
    assert_eq!(state["data"]["step"], 1);

    let missing = post_json(app.clone(), "/api/v1/onboarding/advance", json!({})).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    for data in [
        json!({ "account_type": "actor" }),
        json!({ "display_name": "Maya" }),
        json!({ "terms_accepted": true }),
    ] {
        let response = post_json(app.clone(), "/api/v1/onboarding/advance", data).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let done = body_json(post(app.clone(), "/api/v1/onboarding/complete").await).await;
    assert_eq!(done["data"]["step"], 4);
    assert_eq!(done["data"]["status"], "completed");

    let back = post(app.clone(), "/api/v1/onboarding/back").await;
    assert_eq!(back.status(), StatusCode::CONFLICT);

    let reset = body_json(delete(app, "/api/v1/onboarding").await).await;
    assert_eq!(reset["data"]["step"], 1);
    assert_eq!(reset["data"]["status"], "in_progress");
}

// ---------------------------------------------------------------------------
// Contract review
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contract_review_flags_risky_terms() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/contracts/review",
        json!({ "text": "Licensor grants a perpetual, worldwide license." }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["verdict"], "needs_attention");
    assert!(!json["data"]["flags"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn contract_review_error_trigger_and_empty_text() {
    let app = common::build_test_app();
    let failed = post_json(
        app.clone(),
        "/api/v1/contracts/review",
        json!({ "text": "This clause contains an error." }),
    )
    .await;
    assert_eq!(failed.status(), StatusCode::SERVICE_UNAVAILABLE);

    let empty = post_json(app, "/api/v1/contracts/review", json!({ "text": "  " })).await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_inbox_is_unread_until_marked() {
    let app = common::build_test_app();

    let unread = body_json(get(app.clone(), "/api/v1/conversations/unread").await).await;
    assert_eq!(unread["data"]["unread"], 3);

    let list = body_json(get(app.clone(), "/api/v1/conversations").await).await;
    let id = list["data"][0]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/conversations/{id}/read");
    let marked = body_json(post(app.clone(), &uri).await).await;
    assert_eq!(marked["data"]["marked"], 1);

    let unread = body_json(get(app, "/api/v1/conversations/unread").await).await;
    assert_eq!(unread["data"]["unread"], 2);
}

#[tokio::test]
async fn starting_a_conversation_twice_reuses_it() {
    let app = common::build_test_app();
    let body = json!({ "subject": { "kind": "actor", "id": 3 } });

    let first = post_json(app.clone(), "/api/v1/conversations", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_id = body_json(first).await["data"]["id"].clone();

    let second = post_json(app, "/api/v1/conversations", body).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await["data"]["id"], first_id);
}

#[tokio::test]
async fn send_message_and_archive() {
    let app = common::build_test_app();
    let list = body_json(get(app.clone(), "/api/v1/conversations").await).await;
    let id = list["data"][0]["id"].as_i64().unwrap();

    let response = post_json(
        app.clone(),
        &format!("/api/v1/conversations/{id}/messages"),
        json!({ "content": "  Sounds great!  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let message = body_json(response).await;
    assert_eq!(message["data"]["content"], "Sounds great!");
    assert_eq!(message["data"]["sender"], "user");

    let blank = post_json(
        app.clone(),
        &format!("/api/v1/conversations/{id}/messages"),
        json!({ "content": "   " }),
    )
    .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let archived =
        body_json(post(app.clone(), &format!("/api/v1/conversations/{id}/archive")).await).await;
    assert_eq!(archived["data"]["archived"], true);

    let visible = body_json(get(app.clone(), "/api/v1/conversations").await).await;
    assert_eq!(visible["data"].as_array().unwrap().len(), 2);
    let all = body_json(get(app, "/api/v1/conversations?include_archived=true").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn connect_marks_participant_online() {
    let app = common::build_test_app();
    let list = body_json(get(app.clone(), "/api/v1/conversations").await).await;
    let id = list["data"][0]["id"].as_i64().unwrap();

    let json = body_json(post(app, &format!("/api/v1/conversations/{id}/connect")).await).await;
    assert_eq!(json["data"]["online"], true);
}

#[tokio::test]
async fn unknown_conversation_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/conversations/9999/messages").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Action states
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_action_is_listed_idle() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/actions").await).await;

    let actions = json["data"].as_object().unwrap();
    assert_eq!(actions.len(), 11);
    assert!(actions.values().all(|s| s["status"] == "idle"));
}

#[tokio::test]
async fn failed_action_can_be_reset() {
    let app = common::build_test_app();
    post_json(
        app.clone(),
        "/api/v1/contracts/review",
        json!({ "text": "error" }),
    )
    .await;

    let json = body_json(post(app.clone(), "/api/v1/actions/contract_review/reset").await).await;
    assert_eq!(json["data"]["status"], "idle");

    let unknown = post(app, "/api/v1/actions/teleport/reset").await;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Activity journal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn journal_records_gateway_events() {
    let store = Store::in_memory();
    let state = common::test_state(store.clone());
    let cancel = CancellationToken::new();
    let journal = tokio::spawn(EventJournal::run(
        store,
        state.gateway.context().bus.subscribe(),
        cancel.clone(),
    ));
    let app = common::build_test_app_with(state);

    post(app.clone(), "/api/v1/casting-calls/303/application").await;

    let mut entries = serde_json::Value::Null;
    for _ in 0..50 {
        entries = body_json(get(app.clone(), "/api/v1/activity").await).await["data"].clone();
        if !entries.as_array().unwrap().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(entries[0]["event_type"], "casting.applied");
    assert_eq!(entries[0]["source_entity_id"], "303");

    cancel.cancel();
    journal.await.unwrap();
}
