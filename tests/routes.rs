mod common;

use axum_test::TestServer;
use serde_json::json;
use snaplink::routes::router;

#[tokio::test]
async fn test_full_router_create_then_redirect() {
    let (state, _dir) = common::create_test_state().await;
    let server = TestServer::new(router(state)).unwrap();

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    created.assert_status_ok();

    let id = created.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{id}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_full_router_health() {
    let (state, _dir) = common::create_test_state().await;
    let server = TestServer::new(router(state)).unwrap();

    server.get("/api/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_full_router_unknown_id() {
    let (state, _dir) = common::create_test_state().await;
    let server = TestServer::new(router(state)).unwrap();

    server.get("/nope").await.assert_status_not_found();
}
