//! Idea entity model, its public projection, and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ideaboard_core::types::{DbId, Timestamp};
use ideaboard_core::vote::VoteDirection;

/// Full idea row from the `ideas` table.
///
/// Contains the author id (`user_id`) -- deliberately NOT `Serialize`,
/// so no handler can return the row and leak authorship. The only
/// external representation is [`PublicIdea`].
#[derive(Debug, Clone, FromRow)]
pub struct Idea {
    pub id: DbId,
    /// Author of the idea. Internal bookkeeping only; never serialized.
    pub user_id: DbId,
    pub content: String,
    pub is_locked: bool,
    pub locked_by_id: Option<DbId>,
    pub vote_count: i64,
    pub created_at: Timestamp,
}

/// Externally-safe projection of an idea: the author is dropped
/// unconditionally. The lock holder is exposed on purpose -- it names
/// who is currently editing, not who created the idea.
#[derive(Debug, Clone, Serialize)]
pub struct PublicIdea {
    pub id: DbId,
    pub content: String,
    pub is_locked: bool,
    pub locked_by_id: Option<DbId>,
    pub vote_count: i64,
    pub created_at: Timestamp,
}

impl From<Idea> for PublicIdea {
    fn from(idea: Idea) -> Self {
        PublicIdea {
            id: idea.id,
            content: idea.content,
            is_locked: idea.is_locked,
            locked_by_id: idea.locked_by_id,
            vote_count: idea.vote_count,
            created_at: idea.created_at,
        }
    }
}

/// DTO for creating an idea. `userId` is camelCase on the wire.
#[derive(Debug, Deserialize)]
pub struct CreateIdeaRequest {
    pub content: String,
    #[serde(rename = "userId")]
    pub user_id: DbId,
}

/// DTO for lock and unlock requests (idea id comes from the path).
#[derive(Debug, Deserialize)]
pub struct LockIdeaRequest {
    #[serde(rename = "userId")]
    pub user_id: DbId,
}

/// DTO for casting a vote.
#[derive(Debug, Deserialize)]
pub struct VoteIdeaRequest {
    #[serde(rename = "userId")]
    pub user_id: DbId,
    pub direction: VoteDirection,
}
