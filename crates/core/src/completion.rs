//! Abstraction over the external text-completion service.
//!
//! The classifier and the assist endpoint only see [`CompletionClient`];
//! vendor wire formats live in the `whiteboard-llm` crate.

use async_trait::async_trait;

/// Sampling temperature used when none is specified.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// A single chat-style completion: one system message, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    /// Upper bound on generated tokens; `None` leaves it to the service.
    pub max_tokens: Option<u32>,
    /// Model override; `None` uses the client's configured model.
    pub model: Option<String>,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            model: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Failures reported by a [`CompletionClient`].
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The request could not be delivered or the reply could not be read.
    #[error("Completion transport failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("Completion service error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The reply carried no completion text.
    #[error("Completion service returned no content")]
    EmptyResponse,

    /// No credentials are configured for the service.
    #[error("Completion service is not configured")]
    NotConfigured,
}

/// Capability to turn a system + user message pair into completion text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Whether the client can reach a real service at all.
    fn is_configured(&self) -> bool {
        true
    }
}
