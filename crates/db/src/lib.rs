//! Whiteboard storage.
//!
//! Handlers depend on the [`repositories::WhiteboardRepo`] trait and receive
//! a concrete store at startup. The bundled store keeps records in memory
//! and is reset on every restart.

pub mod models;
pub mod repositories;

use std::sync::Arc;

use repositories::{InMemoryWhiteboardRepo, WhiteboardRepo};

/// Shared handle to whichever store the server was started with.
pub type DynWhiteboardRepo = Arc<dyn WhiteboardRepo>;

/// Create the default in-memory store, preloaded with sample whiteboards.
pub fn create_store() -> DynWhiteboardRepo {
    Arc::new(InMemoryWhiteboardRepo::seeded())
}
