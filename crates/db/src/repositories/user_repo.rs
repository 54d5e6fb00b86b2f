//! Repository for the `users` table.

use sqlx::PgPool;

use ideaboard_core::types::DbId;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "id, username, created_at";

/// Provides data access for users.
pub struct UserRepo;

impl UserRepo {
    /// Fetch a user by id, or `None` if it does not exist.
    pub async fn get(pool: &PgPool, user_id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Existence check by id.
    pub async fn exists(pool: &PgPool, user_id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<(DbId,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// Insert a user. Identity provisioning happens out of band; this is
    /// used by seeds and test fixtures only.
    pub async fn insert(pool: &PgPool, username: &str) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO users (username) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_one(pool)
            .await
    }
}
