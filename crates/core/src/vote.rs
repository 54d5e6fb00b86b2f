//! Vote direction and counter arithmetic.

use serde::{Deserialize, Serialize};

/// Direction of a vote on an idea.
///
/// Serialized as `"up"` / `"down"` in request bodies; stored as the
/// signed delta in the `votes.direction` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Signed counter delta for this direction.
    pub fn delta(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

/// Apply a vote to an aggregate count.
///
/// The count never goes below zero: a down-vote on a zero count is
/// absorbed rather than producing a negative aggregate. The db layer
/// applies the same rule in SQL (`GREATEST(vote_count + delta, 0)`).
pub fn apply(count: i64, direction: VoteDirection) -> i64 {
    (count + direction.delta()).max(0)
}
