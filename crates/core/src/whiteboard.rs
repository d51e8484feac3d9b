//! Whiteboard record validation.
//!
//! Pure checks shared by the API handlers and any store implementation.

use crate::error::CoreError;
use crate::template::TemplateKind;

/// Maximum length of a whiteboard title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a whiteboard description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 2_000;

/// Maximum length of a generation prompt, in characters.
pub const MAX_PROMPT_LEN: usize = 4_000;

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Whiteboard title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Whiteboard title must not exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Whiteboard description must not exceed {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_user_id(user_id: &str) -> Result<(), CoreError> {
    if user_id.trim().is_empty() {
        return Err(CoreError::Validation("User id must not be empty".to_string()));
    }
    Ok(())
}

/// Validate a generation prompt and return it trimmed.
pub fn validate_prompt(prompt: &str) -> Result<&str, CoreError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Prompt is required".to_string()));
    }
    if trimmed.chars().count() > MAX_PROMPT_LEN {
        return Err(CoreError::Validation(format!(
            "Prompt must not exceed {MAX_PROMPT_LEN} characters"
        )));
    }
    Ok(trimmed)
}

/// Resolve an optional template name, defaulting to custom.
///
/// Unlike classifier output, names supplied by clients must be exact.
pub fn resolve_template_kind(name: Option<&str>) -> Result<TemplateKind, CoreError> {
    match name {
        None => Ok(TemplateKind::Custom),
        Some(name) => TemplateKind::from_name(name).ok_or_else(|| {
            CoreError::Validation(format!("Unknown template type '{name}'"))
        }),
    }
}
