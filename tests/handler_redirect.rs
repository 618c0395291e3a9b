mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::api::handlers::redirect_handler;
use snaplink::state::AppState;

fn app(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{id}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, _dir) = common::create_test_state().await;
    let entry = state
        .store
        .create("https://example.com/target".to_string(), None)
        .await
        .unwrap();
    let server = app(state);

    let response = server.get(&format!("/{}", entry.id)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_requested_id() {
    let (state, _dir) = common::create_test_state().await;
    state
        .store
        .create("https://a.com".to_string(), Some("abc".to_string()))
        .await
        .unwrap();
    let server = app(state);

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://a.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _dir) = common::create_test_state().await;
    let server = app(state);

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["id"], "doesnotexist");
}

#[tokio::test]
async fn test_redirect_passes_unvalidated_target_through() {
    let (state, _dir) = common::create_test_state().await;
    state
        .store
        .create("not a url at all".to_string(), Some("odd".to_string()))
        .await
        .unwrap();
    let server = app(state);

    let response = server.get("/odd").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "not a url at all");
}

#[tokio::test]
async fn test_redirect_target_not_representable_as_header() {
    let (state, _dir) = common::create_test_state().await;
    state
        .store
        .create("https://a.com/\nInjected: yes".to_string(), Some("bad".to_string()))
        .await
        .unwrap();
    let server = app(state);

    let response = server.get("/bad").await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}
