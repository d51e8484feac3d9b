//! Prompt-to-template generation.
//!
//! Classifies the prompt, then builds the matching layout. Generation always
//! produces a template: an unrecognised kind or a failed classification both
//! end in the blank custom layout, and the result does not reveal which.

use crate::classifier::{self, ClassifiedIntent};
use crate::completion::CompletionClient;
use crate::layout;
use crate::template::{Template, TemplateKind};

/// Generate a starter template for `prompt`.
pub async fn generate(client: &dyn CompletionClient, prompt: &str) -> Template {
    classify_and_generate(client, prompt).await.1
}

/// Like [`generate`], also returning the intent the template was built from.
///
/// Callers that name a record after the prompt use the intent's title and
/// description; the template keeps its layout's own.
pub async fn classify_and_generate(
    client: &dyn CompletionClient,
    prompt: &str,
) -> (ClassifiedIntent, Template) {
    let intent = classifier::classify(client, prompt).await;
    let template = assemble(&intent);
    (intent, template)
}

/// Build the template an intent describes.
pub fn assemble(intent: &ClassifiedIntent) -> Template {
    match TemplateKind::from_name(&intent.template_kind) {
        Some(kind) => layout::build(kind, &intent.element_labels),
        None => {
            tracing::debug!(
                template_kind = %intent.template_kind,
                "Unrecognised template kind, using custom layout",
            );
            layout::custom(&intent.element_labels)
        }
    }
}
