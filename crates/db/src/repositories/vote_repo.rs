//! Repository for the `votes` table and the per-idea vote counter.

use sqlx::PgPool;

use ideaboard_core::types::DbId;
use ideaboard_core::vote::VoteDirection;

use crate::models::idea::Idea;
use crate::models::vote::Vote;

/// Column list for `ideas` rows returned from counter updates.
const IDEA_COLUMNS: &str = "id, user_id, content, is_locked, locked_by_id, vote_count, created_at";

/// Provides data access for votes.
pub struct VoteRepo;

impl VoteRepo {
    /// Cast a vote on an idea and update its aggregate counter.
    ///
    /// The vote row and the counter update commit in one transaction:
    /// `INSERT ... ON CONFLICT DO NOTHING` against the per-user unique
    /// constraint records the vote, and only a recorded vote touches the
    /// counter. The counter update is clamped (`GREATEST(..., 0)`) so a
    /// down-vote on a zero count cannot drive it negative.
    ///
    /// Returns the updated idea, or `None` if this user already voted on
    /// this idea.
    pub async fn cast(
        pool: &PgPool,
        idea_id: DbId,
        user_id: DbId,
        direction: VoteDirection,
    ) -> Result<Option<Idea>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO votes (user_id, idea_id, direction) VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, idea_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(idea_id)
        .bind(direction.delta() as i16)
        .execute(&mut *tx)
        .await?;

        if inserted.rows_affected() == 0 {
            // Duplicate vote: nothing recorded, leave the counter alone.
            tx.rollback().await?;
            return Ok(None);
        }

        let query = format!(
            "UPDATE ideas SET vote_count = GREATEST(vote_count + $2, 0) \
             WHERE id = $1 \
             RETURNING {IDEA_COLUMNS}"
        );
        let idea = sqlx::query_as::<_, Idea>(&query)
            .bind(idea_id)
            .bind(direction.delta())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(idea))
    }

    /// Fetch a user's vote on an idea, or `None` if they have not voted.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        idea_id: DbId,
    ) -> Result<Option<Vote>, sqlx::Error> {
        sqlx::query_as::<_, Vote>(
            "SELECT id, user_id, idea_id, direction, created_at FROM votes \
             WHERE user_id = $1 AND idea_id = $2",
        )
        .bind(user_id)
        .bind(idea_id)
        .fetch_optional(pool)
        .await
    }

    /// Number of vote rows recorded for an idea.
    pub async fn count_for_idea(pool: &PgPool, idea_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM votes WHERE idea_id = $1")
                .bind(idea_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
