//! Integration tests for `OpenAiClient` against a local mock endpoint.
//!
//! Each test starts a throwaway axum server on an ephemeral port that plays
//! the part of the completion service.

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use whiteboard_core::completion::{CompletionClient, CompletionError, CompletionRequest};
use whiteboard_llm::{LlmConfig, OpenAiClient};

/// What the mock server saw on its last request.
#[derive(Default)]
struct Captured {
    authorization: Option<String>,
    body: Option<Value>,
}

async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Mock that records the request and answers with `reply`.
async fn spawn_recording_mock(
    status: StatusCode,
    reply: Value,
) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = Arc::clone(&captured);

    let router = Router::new().route(
        "/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = Arc::clone(&sink);
            let reply = reply.clone();
            async move {
                let mut seen = sink.lock().unwrap();
                seen.authorization = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                seen.body = Some(body);
                (status, Json(reply))
            }
        }),
    );

    (spawn_mock(router).await, captured)
}

fn config_for(base_url: String) -> LlmConfig {
    LlmConfig {
        api_key: Some("test-key".to_string()),
        base_url,
        model: "gpt-4".to_string(),
        timeout_secs: 5,
    }
}

fn reply_with(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
}

// ---------------------------------------------------------------------------
// Test: successful completion returns content and sends the expected body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn completion_returns_first_choice_content() {
    let (base_url, captured) =
        spawn_recording_mock(StatusCode::OK, reply_with(r#"{"template":"kanban"}"#)).await;
    let client = OpenAiClient::new(config_for(base_url)).unwrap();

    let request = CompletionRequest::new("system text", "organise my sprint");
    let content = client.complete(&request).await.unwrap();

    assert_eq!(content, r#"{"template":"kanban"}"#);

    let seen = captured.lock().unwrap();
    assert_eq!(seen.authorization.as_deref(), Some("Bearer test-key"));

    let body = seen.body.as_ref().unwrap();
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "system text");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "organise my sprint");
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert!(body.get("max_tokens").is_none());
}

// ---------------------------------------------------------------------------
// Test: model override and token limit are forwarded
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_overrides_are_forwarded() {
    let (base_url, captured) = spawn_recording_mock(StatusCode::OK, reply_with("ok")).await;
    let client = OpenAiClient::new(config_for(base_url)).unwrap();

    let request = CompletionRequest::new("sys", "hi")
        .with_model("gpt-3.5-turbo")
        .with_max_tokens(256);
    client.complete(&request).await.unwrap();

    let seen = captured.lock().unwrap();
    let body = seen.body.as_ref().unwrap();
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 256);
}

// ---------------------------------------------------------------------------
// Test: non-2xx status surfaces as an API error with the body attached
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_status_maps_to_api_error() {
    let (base_url, _) = spawn_recording_mock(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "Incorrect API key provided" } }),
    )
    .await;
    let client = OpenAiClient::new(config_for(base_url)).unwrap();

    let err = client
        .complete(&CompletionRequest::new("sys", "hi"))
        .await
        .unwrap_err();

    match err {
        CompletionError::Api { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: reply without choices is an empty response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_choices_map_to_empty_response() {
    let (base_url, _) = spawn_recording_mock(StatusCode::OK, json!({ "choices": [] })).await;
    let client = OpenAiClient::new(config_for(base_url)).unwrap();

    let err = client
        .complete(&CompletionRequest::new("sys", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::EmptyResponse));
}

// ---------------------------------------------------------------------------
// Test: unreachable service is a transport error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_service_maps_to_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenAiClient::new(config_for(format!("http://{addr}"))).unwrap();
    let err = client
        .complete(&CompletionRequest::new("sys", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::Transport(_)));
}
