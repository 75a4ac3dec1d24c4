//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use mockito::{Mock, ServerGuard};

use converse::api::AppState;
use converse::api::app;
use converse::core::AppConfig;
use converse::openai::OpenAiClient;

pub fn test_config(api_hostname: &str) -> AppConfig {
    AppConfig {
        openai_model: String::from("gpt-4o"),
        openai_api_hostname: api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        system_message: String::from("You are a helpful assistant."),
    }
}

/// Creates a test application router whose model calls go to
/// `api_hostname`, usually a `mockito` server.
pub fn test_app(api_hostname: &str) -> Router {
    test_app_with_state(api_hostname).0
}

/// Same as `test_app` but also hands back the shared state so tests
/// can inspect the session registry.
pub fn test_app_with_state(api_hostname: &str) -> (Router, Arc<RwLock<AppState>>) {
    let config = test_config(api_hostname);
    let client = Arc::new(OpenAiClient::from_config(&config));
    let app_state = AppState::new(config, client).expect("Failed to create app state");
    let shared_state = Arc::new(RwLock::new(app_state));
    (app(Arc::clone(&shared_state)), shared_state)
}

/// Mock a successful chat completion that replies with `content`.
pub async fn mock_reply(server: &mut ServerGuard, content: &str) -> Mock {
    let body = serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }]
    });
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Mock a failed chat completion with the given status code.
pub async fn mock_failure(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not JSON")
}
