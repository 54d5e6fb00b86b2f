//! Exclusive edit-lock state machine for ideas.
//!
//! This module holds the pure transition logic: given the current lock
//! state of an idea and a requesting user, decide whether an acquire or
//! release is allowed and what the next state is. The db layer realizes
//! the same transitions as single atomic conditional updates, so two
//! concurrent acquires on the same idea can never both succeed.

use crate::error::CoreError;
use crate::types::DbId;

/// Lock state of a single idea.
///
/// `Locked` always carries the holder, so an idea can never be locked
/// with no holder (or unlocked with a stale holder) by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Unlocked,
    Locked { holder: DbId },
}

impl LockState {
    /// Reconstruct a lock state from the two storage columns.
    ///
    /// Rows violating the locked-iff-holder invariant cannot exist (the
    /// schema CHECKs it), so a holder on an unlocked row is an internal
    /// error rather than a reachable state.
    pub fn from_columns(is_locked: bool, locked_by_id: Option<DbId>) -> Result<Self, CoreError> {
        match (is_locked, locked_by_id) {
            (false, None) => Ok(LockState::Unlocked),
            (true, Some(holder)) => Ok(LockState::Locked { holder }),
            (locked, holder) => Err(CoreError::Internal(format!(
                "inconsistent lock columns: is_locked={locked}, locked_by_id={holder:?}"
            ))),
        }
    }

    /// Attempt to acquire the lock for `user_id`.
    ///
    /// Succeeds only from `Unlocked`. A lock that is already held fails
    /// with `Conflict` regardless of the holder -- re-acquiring one's own
    /// lock is not idempotent. Contention is surfaced to the caller, never
    /// retried or queued here.
    pub fn acquire(self, user_id: DbId) -> Result<LockState, CoreError> {
        match self {
            LockState::Unlocked => Ok(LockState::Locked { holder: user_id }),
            LockState::Locked { .. } => {
                Err(CoreError::Conflict("Idea is already locked".into()))
            }
        }
    }

    /// Attempt to release the lock as `user_id`.
    ///
    /// Only the current holder may release. Releasing an unlocked idea is
    /// a `Conflict` (the precondition -- a held lock -- is absent);
    /// releasing another user's lock is `Forbidden`.
    pub fn release(self, user_id: DbId) -> Result<LockState, CoreError> {
        match self {
            LockState::Unlocked => Err(CoreError::Conflict("Idea is not locked".into())),
            LockState::Locked { holder } if holder == user_id => Ok(LockState::Unlocked),
            LockState::Locked { .. } => Err(CoreError::Forbidden(
                "Idea is locked by another user".into(),
            )),
        }
    }
}
