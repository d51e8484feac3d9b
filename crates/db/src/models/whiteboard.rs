//! Whiteboard record and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use whiteboard_core::template::TemplateKind;
use whiteboard_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Whiteboard {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub template: TemplateKind,
    /// Canvas content; a generated template until the editor saves its own.
    pub content: Option<serde_json::Value>,
    /// Owner of the whiteboard.
    pub user_id: String,
    /// User ids with access, owner included.
    pub collaborators: Vec<String>,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Whiteboard {
    /// Whether `user_id` owns the whiteboard or collaborates on it.
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.user_id == user_id || self.collaborators.iter().any(|c| c == user_id)
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a whiteboard. The owner becomes the first collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWhiteboard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub template: TemplateKind,
    pub user_id: String,
    pub content: Option<serde_json::Value>,
    pub is_public: Option<bool>,
}

/// DTO for partially updating a whiteboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWhiteboard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<TemplateKind>,
    /// `None` leaves content alone; `Some(None)` (an explicit `null`) clears it.
    #[serde(default, deserialize_with = "explicit_null")]
    pub content: Option<Option<serde_json::Value>>,
    pub collaborators: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

/// Distinguish an absent field from one set to `null`.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<serde_json::Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<serde_json::Value>::deserialize(deserializer).map(Some)
}
