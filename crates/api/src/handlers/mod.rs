//! HTTP handler modules.

pub mod ideas;
