//! Chat-completion client for OpenAI-compatible services.
//!
//! Implements [`whiteboard_core::completion::CompletionClient`] over the
//! `/chat/completions` endpoint using [`reqwest`].

pub mod config;
pub mod openai;

pub use config::LlmConfig;
pub use openai::{LlmError, OpenAiClient};
