//! Domain logic for the idea board: lock state machine, content rules,
//! vote arithmetic, and the shared error taxonomy.
//!
//! This crate has no internal dependencies so the db and api layers (and
//! any future tooling) can share the same types and decision logic.

pub mod error;
pub mod idea;
pub mod lock;
pub mod types;
pub mod vote;
