//! Domain logic for the whiteboard backend.
//!
//! Holds the template data model, the per-kind layout builders, the prompt
//! classifier and the generator that ties them together. Nothing here talks
//! to the network directly: the completion service is reached through the
//! [`completion::CompletionClient`] trait.

pub mod assist;
pub mod classifier;
pub mod completion;
pub mod error;
pub mod generator;
pub mod layout;
pub mod template;
pub mod types;
pub mod whiteboard;
