//! REST client for the OpenAI chat completions endpoint.
//!
//! Any service speaking the same wire format (a `POST /chat/completions`
//! with bearer auth) works by pointing `base_url` at it.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use whiteboard_core::completion::{CompletionClient, CompletionError, CompletionRequest};

use crate::config::LlmConfig;

/// Errors from the completion REST layer.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Completion API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The reply contained no choices or an empty message.
    #[error("Completion API returned no content")]
    EmptyResponse,

    /// No API key is configured.
    #[error("No API key configured")]
    MissingApiKey,
}

impl From<LlmError> for CompletionError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Request(e) => CompletionError::Transport(e.to_string()),
            LlmError::ApiError { status, body } => CompletionError::Api { status, body },
            LlmError::EmptyResponse => CompletionError::EmptyResponse,
            LlmError::MissingApiKey => CompletionError::NotConfigured,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if it has any.
    fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for one chat completions endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OpenAiClient {
    /// Build a client with its own connection pool and the configured
    /// request timeout.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Send one system + user exchange and return the reply text.
    pub async fn chat(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.config.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let model = request.model.as_deref().unwrap_or(self.config.model.as_str());

        let body = ChatRequest {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(model, endpoint = %self.endpoint(), "Sending chat completion");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed: ChatResponse = response.json().await?;

        parsed.into_content().ok_or(LlmError::EmptyResponse)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, turning anything else
    /// into [`LlmError::ApiError`] with the body text attached.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.chat(request).await.map_err(|err| {
            tracing::warn!(error = %err, "Chat completion failed");
            CompletionError::from(err)
        })
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
