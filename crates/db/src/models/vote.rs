//! Vote entity model.

use sqlx::FromRow;

use ideaboard_core::types::{DbId, Timestamp};

/// Full vote row from the `votes` table.
///
/// `direction` is the signed delta (+1 up, -1 down) as stored; the wire
/// representation lives in `ideaboard_core::vote::VoteDirection`.
#[derive(Debug, Clone, FromRow)]
pub struct Vote {
    pub id: DbId,
    pub user_id: DbId,
    pub idea_id: DbId,
    pub direction: i16,
    pub created_at: Timestamp,
}
