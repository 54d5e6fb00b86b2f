//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` projection struct for external-facing output, where
//!   the row itself must not be exposed directly
//! - `Deserialize` request DTOs

pub mod idea;
pub mod user;
pub mod vote;
