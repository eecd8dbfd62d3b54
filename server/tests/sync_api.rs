//! Sync API Integration Tests
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`; each
//! test gets its own temp data directory.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use listdrop_server::auth::{AuthError, IdentityVerifier};
use listdrop_server::store::FileStore;
use listdrop_server::{router, AppState};

/// Accepts credentials of the form `token-for:<subject>`.
struct StubVerifier;

#[async_trait]
impl IdentityVerifier for StubVerifier {
    async fn verify(&self, credential: &str) -> Result<String, AuthError> {
        credential
            .strip_prefix("token-for:")
            .map(str::to_string)
            .ok_or(AuthError::InvalidCredential)
    }
}

fn insecure_app(dir: &std::path::Path) -> axum::Router {
    router(AppState {
        store: Arc::new(FileStore::new(dir).unwrap()),
        verifier: None,
    })
}

fn verified_app(dir: &std::path::Path) -> axum::Router {
    router(AppState {
        store: Arc::new(FileStore::new(dir).unwrap()),
        verifier: Some(Arc::new(StubVerifier)),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn save_request(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/sync/save")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn load_request(user_id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/sync/load?userId={user_id}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn load_without_prior_save_returns_empty_lists() {
    let dir = tempfile::tempdir().unwrap();
    let response = insecure_app(dir.path())
        .oneshot(load_request("fresh-user"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "lists": [] }));
}

#[tokio::test]
async fn load_without_user_id_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = insecure_app(dir.path())
        .oneshot(Request::builder().uri("/api/sync/load").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "userId required");
}

#[tokio::test]
async fn save_with_empty_user_id_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = insecure_app(dir.path())
        .oneshot(save_request(json!({ "userId": "", "data": { "lists": [] } })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "userId required");
}

#[tokio::test]
async fn save_rejects_payloads_without_a_lists_array() {
    let dir = tempfile::tempdir().unwrap();
    for bad in [json!({ "lists": "nope" }), json!({ "boards": [] }), json!(42)] {
        let response = insecure_app(dir.path())
            .oneshot(save_request(json!({ "userId": "alice", "data": bad })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn save_accepts_a_bare_array_payload() {
    let dir = tempfile::tempdir().unwrap();
    let response = insecure_app(dir.path())
        .oneshot(save_request(json!({ "userId": "alice", "data": [] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn save_then_load_round_trips_the_board() {
    let dir = tempfile::tempdir().unwrap();
    let app = insecure_app(dir.path());
    let board = json!({
        "lists": [
            { "id": "l1", "name": "Today", "items": [
                { "id": "i1", "text": "Buy groceries", "done": false }
            ]}
        ]
    });

    let response = app
        .clone()
        .oneshot(save_request(json!({ "userId": "alice", "data": board })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ok": true }));

    let response = app.oneshot(load_request("alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, board);
}

#[tokio::test]
async fn users_do_not_see_each_others_boards() {
    let dir = tempfile::tempdir().unwrap();
    let app = insecure_app(dir.path());
    let board = json!({ "lists": [{ "id": "l1", "name": "Private", "items": [] }] });

    app.clone()
        .oneshot(save_request(json!({ "userId": "alice", "data": board })))
        .await
        .unwrap();

    let response = app.oneshot(load_request("bob")).await.unwrap();
    assert_eq!(body_json(response).await, json!({ "lists": [] }));
}

#[tokio::test]
async fn verified_mode_requires_a_bearer_credential() {
    let dir = tempfile::tempdir().unwrap();
    let response = verified_app(dir.path())
        .oneshot(load_request("alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn verified_mode_rejects_a_mismatched_subject() {
    let dir = tempfile::tempdir().unwrap();
    let response = verified_app(dir.path())
        .oneshot(
            Request::builder()
                .uri("/api/sync/load?userId=alice")
                .header("authorization", "Bearer token-for:mallory")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn verified_mode_accepts_a_matching_subject() {
    let dir = tempfile::tempdir().unwrap();
    let app = verified_app(dir.path());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/sync/save")
                .header("content-type", "application/json")
                .header("authorization", "Bearer token-for:alice")
                .body(Body::from(
                    json!({ "userId": "alice", "data": { "lists": [] } }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sync/load?userId=alice")
                .header("authorization", "Bearer token-for:alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
