//! Whiteboard repository trait and its in-memory implementation.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;
use whiteboard_core::error::CoreError;
use whiteboard_core::template::TemplateKind;
use whiteboard_core::types::{DbId, Timestamp};

use crate::models::whiteboard::{CreateWhiteboard, UpdateWhiteboard, Whiteboard};

/// Data access for whiteboards.
///
/// Backends report their own failures as [`CoreError::Internal`].
#[async_trait]
pub trait WhiteboardRepo: Send + Sync {
    /// List whiteboards in creation order, optionally only those visible to
    /// `user_id` (owned or shared).
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<Whiteboard>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Whiteboard>, CoreError>;

    async fn create(&self, dto: &CreateWhiteboard) -> Result<Whiteboard, CoreError>;

    /// Apply the fields present in `dto` and bump `updated_at`.
    /// Returns `None` if no whiteboard has that id.
    async fn update(
        &self,
        id: DbId,
        dto: &UpdateWhiteboard,
    ) -> Result<Option<Whiteboard>, CoreError>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

struct Rows {
    next_id: DbId,
    items: Vec<Whiteboard>,
}

/// Process-local store. Contents are lost on restart.
pub struct InMemoryWhiteboardRepo {
    rows: RwLock<Rows>,
}

impl Default for InMemoryWhiteboardRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWhiteboardRepo {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// A store holding the two sample whiteboards shown on a fresh dashboard.
    pub fn seeded() -> Self {
        Self::with_items(vec![
            sample(
                1,
                "Project Brainstorming",
                "Ideas for the new product launch",
                TemplateKind::Mindmap,
                &["user1", "user2", "user3"],
                seed_date(15),
            ),
            sample(
                2,
                "Study Notes - Physics",
                "Chapter 5: Quantum Mechanics",
                TemplateKind::Notes,
                &["user1"],
                seed_date(14),
            ),
        ])
    }

    fn with_items(items: Vec<Whiteboard>) -> Self {
        let next_id = items.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        Self {
            rows: RwLock::new(Rows { next_id, items }),
        }
    }
}

fn seed_date(day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn sample(
    id: DbId,
    title: &str,
    description: &str,
    template: TemplateKind,
    collaborators: &[&str],
    at: Timestamp,
) -> Whiteboard {
    Whiteboard {
        id,
        title: title.to_string(),
        description: description.to_string(),
        template,
        content: None,
        user_id: "user1".to_string(),
        collaborators: collaborators.iter().map(|c| c.to_string()).collect(),
        is_public: false,
        created_at: at,
        updated_at: at,
    }
}

#[async_trait]
impl WhiteboardRepo for InMemoryWhiteboardRepo {
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<Whiteboard>, CoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .items
            .iter()
            .filter(|w| user_id.map_or(true, |u| w.is_visible_to(u)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Whiteboard>, CoreError> {
        let rows = self.rows.read().await;
        Ok(rows.items.iter().find(|w| w.id == id).cloned())
    }

    async fn create(&self, dto: &CreateWhiteboard) -> Result<Whiteboard, CoreError> {
        let mut rows = self.rows.write().await;
        let now = Utc::now();

        let whiteboard = Whiteboard {
            id: rows.next_id,
            title: dto.title.clone(),
            description: dto.description.clone(),
            template: dto.template,
            content: dto.content.clone(),
            user_id: dto.user_id.clone(),
            collaborators: vec![dto.user_id.clone()],
            is_public: dto.is_public.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        rows.next_id += 1;
        rows.items.push(whiteboard.clone());

        tracing::debug!(id = whiteboard.id, total = rows.items.len(), "Whiteboard stored");

        Ok(whiteboard)
    }

    async fn update(
        &self,
        id: DbId,
        dto: &UpdateWhiteboard,
    ) -> Result<Option<Whiteboard>, CoreError> {
        let mut rows = self.rows.write().await;
        let Some(whiteboard) = rows.items.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &dto.title {
            whiteboard.title = title.clone();
        }
        if let Some(description) = &dto.description {
            whiteboard.description = description.clone();
        }
        if let Some(template) = dto.template {
            whiteboard.template = template;
        }
        if let Some(content) = &dto.content {
            whiteboard.content = content.clone();
        }
        if let Some(collaborators) = &dto.collaborators {
            whiteboard.collaborators = collaborators.clone();
        }
        if let Some(is_public) = dto.is_public {
            whiteboard.is_public = is_public;
        }
        whiteboard.updated_at = Utc::now();

        Ok(Some(whiteboard.clone()))
    }
}
