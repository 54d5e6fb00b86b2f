//! Repository for the `ideas` table, including the atomic lock
//! acquire/release updates.

use sqlx::PgPool;

use ideaboard_core::types::DbId;

use crate::models::idea::Idea;

/// Column list for `ideas` queries.
const COLUMNS: &str = "id, user_id, content, is_locked, locked_by_id, vote_count, created_at";

/// Provides data access for ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// List all ideas in stable id order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas ORDER BY id ASC");
        sqlx::query_as::<_, Idea>(&query).fetch_all(pool).await
    }

    /// Fetch a single idea, or `None` if it does not exist.
    pub async fn get(pool: &PgPool, idea_id: DbId) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas WHERE id = $1");
        sqlx::query_as::<_, Idea>(&query)
            .bind(idea_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new idea (unlocked, zero votes) and return the row.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        content: &str,
    ) -> Result<Idea, sqlx::Error> {
        let query = format!(
            "INSERT INTO ideas (user_id, content) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(user_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Attempt to acquire the exclusive lock on an idea.
    ///
    /// Single conditional update guarded by the expected prior state, so
    /// two concurrent calls on the same unlocked idea yield exactly one
    /// winner. Returns the updated row, or `None` if the idea is missing
    /// or already locked (callers disambiguate via [`IdeaRepo::get`]).
    pub async fn try_lock(
        pool: &PgPool,
        idea_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!(
            "UPDATE ideas SET is_locked = TRUE, locked_by_id = $2 \
             WHERE id = $1 AND is_locked = FALSE \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(idea_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Release the lock on an idea. Only the holder (matching `user_id`)
    /// can release.
    ///
    /// Returns the updated row, or `None` if the idea is missing, is not
    /// locked, or is locked by someone else.
    pub async fn unlock(
        pool: &PgPool,
        idea_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!(
            "UPDATE ideas SET is_locked = FALSE, locked_by_id = NULL \
             WHERE id = $1 AND is_locked = TRUE AND locked_by_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(idea_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
