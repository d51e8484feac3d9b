use std::sync::Arc;

use whiteboard_core::completion::CompletionClient;
use whiteboard_db::DynWhiteboardRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Whiteboard store.
    pub store: DynWhiteboardRepo,
    /// Text-completion service used for template generation and the assistant.
    pub completion: Arc<dyn CompletionClient>,
}
