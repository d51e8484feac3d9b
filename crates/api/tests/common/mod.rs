#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use whiteboard_api::config::ServerConfig;
use whiteboard_api::router::build_app_router;
use whiteboard_api::state::AppState;
use whiteboard_core::completion::{CompletionClient, CompletionError, CompletionRequest};
use whiteboard_db::repositories::InMemoryWhiteboardRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        assist_model: "gpt-3.5-turbo".to_string(),
        log_json: false,
    }
}

/// Completion stub with a canned outcome; records every request it sees.
pub struct StubCompletion {
    outcome: Outcome,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

enum Outcome {
    Reply(String),
    Empty,
    Upstream,
    NotConfigured,
}

impl StubCompletion {
    pub fn replying(reply: &str) -> Arc<Self> {
        Self::with(Outcome::Reply(reply.to_string()))
    }

    pub fn empty() -> Arc<Self> {
        Self::with(Outcome::Empty)
    }

    pub fn upstream_failure() -> Arc<Self> {
        Self::with(Outcome::Upstream)
    }

    pub fn unconfigured() -> Arc<Self> {
        Self::with(Outcome::NotConfigured)
    }

    fn with(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Outcome::Reply(reply) => Ok(reply.clone()),
            Outcome::Empty => Err(CompletionError::EmptyResponse),
            Outcome::Upstream => Err(CompletionError::Api {
                status: 500,
                body: "upstream exploded".to_string(),
            }),
            Outcome::NotConfigured => Err(CompletionError::NotConfigured),
        }
    }

    fn is_configured(&self) -> bool {
        !matches!(self.outcome, Outcome::NotConfigured)
    }
}

/// Build the full application router with all middleware layers, backed by
/// a freshly seeded in-memory store and the given completion client.
pub fn build_test_app(completion: Arc<StubCompletion>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(InMemoryWhiteboardRepo::seeded()),
        completion,
    };
    build_app_router(state, &config)
}

/// App whose completion service replies with an unparseable string.
pub fn build_default_app() -> Router {
    build_test_app(StubCompletion::replying("not json"))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
