mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use url_short::api::handlers::{redirect_handler, shorten_handler};

fn test_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/", post(shorten_handler))
        .route("/{short_id}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let server = test_server();

    let response = server
        .post("/")
        .json(&json!({ "original_url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let short_id = json["short_id"].as_str().unwrap();
    assert_eq!(short_id.len(), 6);
    assert!(short_id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::BASE_URL, short_id)
    );
    assert_eq!(json["original_url"], "https://example.com/some/long/path");
}

#[tokio::test]
async fn test_shorten_stores_url_verbatim() {
    let server = test_server();

    // No normalization at write time: scheme-less input, query, and fragment
    // come back exactly as submitted.
    let original = "example.com/path?q=1&lang=ru#frag";
    let response = server
        .post("/")
        .json(&json!({ "original_url": original }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], original);
}

#[tokio::test]
async fn test_shorten_empty_url_is_rejected() {
    let server = test_server();

    let response = server.post("/").json(&json!({ "original_url": "" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_assigns_distinct_short_ids() {
    let server = test_server();

    let mut short_ids = std::collections::HashSet::new();
    for i in 0..10 {
        let response = server
            .post("/")
            .json(&json!({ "original_url": format!("https://example.com/{i}") }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json::<serde_json::Value>();
        short_ids.insert(json["short_id"].as_str().unwrap().to_string());
    }

    assert_eq!(short_ids.len(), 10);
}

#[tokio::test]
async fn test_shorten_then_redirect_roundtrip() {
    let server = test_server();

    let response = server
        .post("/")
        .json(&json!({ "original_url": "https://example.com/target" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let short_id = json["short_id"].as_str().unwrap();

    let redirect = server.get(&format!("/{short_id}")).await;

    redirect.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        redirect.header("location").to_str().unwrap(),
        "https://example.com/target"
    );
}
