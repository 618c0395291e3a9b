mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use snaplink::api::handlers::shorten_handler;
use snaplink::state::AppState;

fn app(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_generated_id() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(json["short"], format!("{}/{}", common::BASE_URL, id));
    assert_eq!(json["original"], "https://example.com");

    assert_eq!(state.store.resolve(id).await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_shorten_with_requested_id() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://a.com", "id": "abc" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "abc");
    assert_eq!(json["short"], "https://s.example.com/abc");
    assert_eq!(json["original"], "https://a.com");
}

#[tokio::test]
async fn test_shorten_duplicate_id_conflict() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state.clone());

    server
        .post("/shorten")
        .json(&json!({ "url": "https://a.com", "id": "abc" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://b.com", "id": "abc" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["id"], "abc");

    assert_eq!(state.store.resolve("abc").await.unwrap(), "https://a.com");
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state.clone());

    let response = server.post("/shorten").json(&json!({ "id": "abc" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(state.store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state);

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_empty_id_is_generated() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "id": "" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_shorten_keeps_target_verbatim() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "HTTPS://Example.COM:443/Path?q=1#frag" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original"], "HTTPS://Example.COM:443/Path?q=1#frag");
}

#[tokio::test]
async fn test_shorten_persists_snapshot() {
    let (state, dir) = common::create_test_state().await;
    let server = app(state);

    server
        .post("/shorten")
        .json(&json!({ "url": "https://a.com", "id": "abc" }))
        .await
        .assert_status_ok();

    let snapshot = common::read_snapshot(&common::snapshot_path(&dir));
    assert_eq!(snapshot, json!({ "abc": "https://a.com" }));
}

#[tokio::test]
async fn test_shorten_same_url_twice_gets_two_ids() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state.clone());

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["id"], second["id"]);
    assert_eq!(state.store.len().await, 2);
}
