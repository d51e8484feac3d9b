//! Repository layer.

pub mod whiteboard_repo;

pub use whiteboard_repo::{InMemoryWhiteboardRepo, WhiteboardRepo};
