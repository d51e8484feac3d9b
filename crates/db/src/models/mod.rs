//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct for the stored record
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod whiteboard;
