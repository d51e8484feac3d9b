//! Prompt classification.
//!
//! Asks the completion service which template kind fits a freeform prompt
//! and which element labels to use. Classification never fails: transport
//! errors and unparseable replies both produce [`ClassifiedIntent::default`].

use serde_json::Value;

use crate::completion::{CompletionClient, CompletionRequest};

pub const DEFAULT_TEMPLATE_KIND: &str = "custom";
pub const DEFAULT_TITLE: &str = "New Whiteboard";
pub const DEFAULT_DESCRIPTION: &str = "AI-generated whiteboard";

/// System instruction sent with every classification request.
pub const SYSTEM_PROMPT: &str = "\
You are an AI assistant that helps users set up whiteboards. Analyze the user's prompt and determine:
1. The most appropriate template type (calendar, mindmap, timeline, kanban, notes, flowchart, or custom)
2. What elements should be included
3. A suitable title
4. A brief description

Available templates:
- calendar: For scheduling, events, appointments
- mindmap: For brainstorming, idea organization
- timeline: For project planning, historical events
- kanban: For task management, workflow
- notes: For study notes, documentation
- flowchart: For processes, decision trees
- custom: For unique layouts

Respond with a JSON object containing: template, elements (array of element descriptions), title, description";

/// Structured reading of a prompt.
///
/// `template_kind` is kept as the raw string the service returned; the
/// generator decides what to do with unrecognised values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedIntent {
    pub template_kind: String,
    pub element_labels: Vec<String>,
    pub title: String,
    pub description: String,
}

impl Default for ClassifiedIntent {
    fn default() -> Self {
        Self {
            template_kind: DEFAULT_TEMPLATE_KIND.to_string(),
            element_labels: Vec::new(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// Classify `prompt` with a single completion call.
pub async fn classify(client: &dyn CompletionClient, prompt: &str) -> ClassifiedIntent {
    let request = CompletionRequest::new(SYSTEM_PROMPT, prompt);

    let reply = match client.complete(&request).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(error = %err, "Prompt classification request failed");
            return ClassifiedIntent::default();
        }
    };

    match parse_intent(&reply) {
        Some(intent) => {
            tracing::debug!(
                template_kind = %intent.template_kind,
                labels = intent.element_labels.len(),
                "Prompt classified",
            );
            intent
        }
        None => {
            tracing::warn!(reply_len = reply.len(), "Unparseable classification reply");
            ClassifiedIntent::default()
        }
    }
}

/// Parse a completion reply into an intent.
///
/// Returns `None` when the reply is not JSON at all. A JSON reply that is
/// not an object, or lacks fields, yields defaults for what is missing.
/// Empty strings and nulls count as missing.
pub fn parse_intent(reply: &str) -> Option<ClassifiedIntent> {
    let value: Value = serde_json::from_str(strip_code_fence(reply)).ok()?;
    let defaults = ClassifiedIntent::default();

    let Value::Object(fields) = value else {
        return Some(defaults);
    };

    let text_field = |name: &str, fallback: String| {
        fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(fallback)
    };

    let element_labels: Vec<String> = fields
        .get("elements")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(ClassifiedIntent {
        template_kind: text_field("template", defaults.template_kind),
        element_labels,
        title: text_field("title", defaults.title),
        description: text_field("description", defaults.description),
    })
}

/// Remove a surrounding Markdown code fence, with or without an info string.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`), on its own line or not.
    let body = body.trim_start();
    let info_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    body[info_len..].trim()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
