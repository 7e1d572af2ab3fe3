//! Integration tests for the gateway end-to-end flow
//!
//! These tests exercise the HTTP surface the way a frontend would: the real
//! router is served on an ephemeral port, with a mockito server standing in
//! for the Gemini endpoint. They verify:
//! 1. Input validation mapping to 400 responses
//! 2. The full generate/fix pipeline against a stubbed model
//! 3. Upstream failures surfacing as 500 responses with details
//! 4. The health check shape

use codegen_backend::api;
use codegen_backend::config::{Config, GeminiConfig, ServerConfig};
use codegen_backend::state::AppState;
use mockito::{Matcher, ServerGuard};
use serde_json::{json, Value};
use serial_test::serial;
use std::sync::Arc;

/// Serve the real router on an ephemeral port, pointed at the given Gemini
/// base URL. Returns the gateway's own base URL.
async fn spawn_gateway(gemini_base_url: &str) -> String {
    let config = Config {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        gemini: GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-pro".to_string(),
            api_base_url: gemini_base_url.to_string(),
        },
    };
    let app = api::router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("test server failed");
    });

    format!("http://{}", addr)
}

/// Stub the Gemini endpoint with a 200 response carrying the given text as
/// the first candidate's first part.
async fn mock_model_answer(server: &mut ServerGuard, text: &str) -> mockito::Mock {
    let body = json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            }
        }]
    });
    server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
            "key".into(),
            "test-key".into(),
        )]))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn test_health_check() {
    let base_url = spawn_gateway("http://localhost:9").await;

    let response = reqwest::get(format!("{}/api/health", base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "message": "Backend service is running"
        })
    );
}

#[tokio::test]
async fn test_generate_missing_prompt_returns_400() {
    let base_url = spawn_gateway("http://localhost:9").await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", base_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Prompt is required" }));
}

#[tokio::test]
async fn test_fix_missing_code_returns_400() {
    let base_url = spawn_gateway("http://localhost:9").await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/fix", base_url))
        .json(&json!({ "error": "NameError: name 'x' is not defined" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Code is required" }));
}

#[tokio::test]
#[serial]
async fn test_generate_returns_fenced_block_interior() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_model_answer(
        &mut server,
        "Sure!\n```python\ndef add(a, b):\n    return a + b\n```\nLet me know if you need more.",
    )
    .await;

    let base_url = spawn_gateway(&server.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", base_url))
        .json(&json!({ "prompt": "add two numbers" }))
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "code": "def add(a, b):\n    return a + b" }));
}

#[tokio::test]
#[serial]
async fn test_fix_returns_trimmed_unfenced_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_model_answer(&mut server, "\nx = 1\nprint(x)\n").await;

    let base_url = spawn_gateway(&server.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/fix", base_url))
        .json(&json!({ "code": "x=1/0" }))
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "code": "x = 1\nprint(x)" }));
}

#[tokio::test]
#[serial]
async fn test_upstream_failure_surfaces_status_and_details() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
            "key".into(),
            "test-key".into(),
        )]))
        .with_status(503)
        .with_body(r#"{"error": "model overloaded"}"#)
        .create_async()
        .await;

    let base_url = spawn_gateway(&server.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", base_url))
        .json(&json!({ "prompt": "add two numbers" }))
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "API request failed with status 503");
    assert_eq!(body["details"], r#"{"error": "model overloaded"}"#);
}

#[tokio::test]
#[serial]
async fn test_unexpected_upstream_shape_surfaces_500() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
            "key".into(),
            "test-key".into(),
        )]))
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let base_url = spawn_gateway(&server.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/fix", base_url))
        .json(&json!({ "code": "x=1/0", "error": "ZeroDivisionError" }))
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Unexpected API response format" }));
}
