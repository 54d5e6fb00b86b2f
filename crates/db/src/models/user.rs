//! User entity model.
//!
//! Users are provisioned out of band; the API only ever reads them.

use serde::Serialize;
use sqlx::FromRow;

use ideaboard_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
}
