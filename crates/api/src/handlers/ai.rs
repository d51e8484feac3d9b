//! Handlers for AI-assisted whiteboard setup.
//!
//! Template generation never reports upstream failures: a failed
//! classification yields the blank custom template with a 200. The
//! assistant, whose reply is shown to the user directly, does surface them.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use whiteboard_core::completion::CompletionError;
use whiteboard_core::{assist, generator, whiteboard};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body shared by both AI endpoints.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: Option<String>,
}

impl PromptRequest {
    /// The trimmed prompt, or a 400 if it is missing or blank.
    fn validated(&self) -> AppResult<&str> {
        let prompt = self
            .prompt
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Prompt is required".to_string()))?;
        Ok(whiteboard::validate_prompt(prompt)?)
    }
}

/// Assistant reply, passed through verbatim.
#[derive(Debug, Serialize)]
pub struct AssistResponse {
    pub result: String,
}

/// POST /api/v1/ai/templates
///
/// Generate a starter template from a freeform prompt.
pub async fn generate_template(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let prompt = input.validated()?;

    let template = generator::generate(state.completion.as_ref(), prompt).await;

    tracing::info!(
        template_type = %template.kind,
        elements = template.elements.len(),
        "Template generated",
    );

    Ok(Json(DataResponse { data: template }))
}

/// POST /api/v1/ai/assist
///
/// Ask the canvas assistant for a single element or a short answer.
pub async fn assist(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let prompt = input.validated()?;

    let request = assist::assist_request(prompt, Some(&state.config.assist_model));
    let result = match state.completion.complete(&request).await {
        Ok(text) => text,
        Err(CompletionError::EmptyResponse) => String::new(),
        Err(err) => return Err(err.into()),
    };

    tracing::info!(reply_len = result.len(), "Assistant replied");

    Ok(Json(DataResponse {
        data: AssistResponse { result },
    }))
}
