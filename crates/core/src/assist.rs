//! Single-element canvas assistant.
//!
//! Unlike template generation, the assistant's reply is passed through to
//! the editor verbatim: either one JSON element description or a short
//! free-text answer.

use crate::completion::CompletionRequest;

/// Reply length cap for assistant requests.
pub const ASSIST_MAX_TOKENS: u32 = 256;

/// System instruction for the canvas assistant.
pub const ASSIST_SYSTEM_PROMPT: &str = concat!(
    "You are an assistant that helps users create and edit whiteboards. ",
    "If the user asks to add a shape, text, or sticky note, respond ONLY with a single JSON object describing the element. ",
    "Example for a rectangle: { \"type\": \"shape\", \"shape\": \"rectangle\", \"position\": { \"x\": 200, \"y\": 150 }, ",
    "\"size\": { \"width\": 120, \"height\": 80 }, \"style\": { \"fill\": \"#fef3c7\", \"stroke\": \"#f59e0b\", \"strokeWidth\": 2 } }. ",
    "Example for text: { \"type\": \"text\", \"content\": \"Hello, world!\", \"position\": { \"x\": 100, \"y\": 100 }, ",
    "\"style\": { \"fontSize\": 32, \"fontFamily\": \"Arial\", \"fill\": \"#000000\" } }. ",
    "If the user asks a general question, respond with a short helpful answer.",
);

/// Build the completion request for an assistant prompt.
pub fn assist_request(prompt: &str, model: Option<&str>) -> CompletionRequest {
    let request =
        CompletionRequest::new(ASSIST_SYSTEM_PROMPT, prompt).with_max_tokens(ASSIST_MAX_TOKENS);
    match model {
        Some(model) => request.with_model(model),
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::DEFAULT_TEMPERATURE;

    #[test]
    fn assist_request_is_capped_and_uses_model_override() {
        let request = assist_request("add a red circle", Some("gpt-3.5-turbo"));
        assert_eq!(request.system, ASSIST_SYSTEM_PROMPT);
        assert_eq!(request.user, "add a red circle");
        assert_eq!(request.max_tokens, Some(256));
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(request.model.as_deref(), Some("gpt-3.5-turbo"));
    }

    #[test]
    fn assist_request_without_override_uses_client_model() {
        assert_eq!(assist_request("hi", None).model, None);
    }
}
