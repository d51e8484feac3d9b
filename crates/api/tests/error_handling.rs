//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use whiteboard_api::error::AppError;
use whiteboard_core::completion::CompletionError;
use whiteboard_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Whiteboard",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Whiteboard with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: Validation and bad request map to 400 with distinct codes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Title must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Title must not be empty");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Prompt is required".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Prompt is required");
}

// ---------------------------------------------------------------------------
// Test: Internal errors hide their detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_errors_are_sanitized() {
    for err in [
        AppError::InternalError("serializer blew up".into()),
        AppError::Core(CoreError::Internal("lock poisoned".into())),
    ] {
        let (status, json) = error_to_response(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}

// ---------------------------------------------------------------------------
// Test: Completion errors map to 503 / 502
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_credentials_return_503() {
    let (status, json) = error_to_response(CompletionError::NotConfigured.into()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "AI_NOT_CONFIGURED");
}

#[tokio::test]
async fn upstream_failures_return_502_without_leaking_body() {
    let failures = [
        CompletionError::Transport("connection reset".into()),
        CompletionError::Api {
            status: 429,
            body: "rate limited: org-secret".into(),
        },
        CompletionError::EmptyResponse,
    ];

    for err in failures {
        let (status, json) = error_to_response(err.into()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["code"], "AI_UPSTREAM_ERROR");
        assert_eq!(json["error"], "The AI service request failed");
    }
}
