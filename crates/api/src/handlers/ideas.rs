//! Handlers for the idea board: listing, creation, exclusive edit locks,
//! and voting.
//!
//! Every response body goes through [`PublicIdea`], the projection that
//! drops the author id. The storage row (`Idea`) is not serializable, so
//! there is no code path that could leak authorship by accident.
//!
//! Lock acquisition and release are single conditional updates in the
//! repository; when one fails, the handler re-reads the row and lets the
//! core state machine name the precise error (conflict, forbidden, not
//! found).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ideaboard_core::error::CoreError;
use ideaboard_core::idea::validate_content;
use ideaboard_core::lock::LockState;
use ideaboard_core::types::DbId;
use ideaboard_db::models::idea::{CreateIdeaRequest, LockIdeaRequest, PublicIdea, VoteIdeaRequest};
use ideaboard_db::repositories::{IdeaRepo, UserRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Ensure the referenced user exists before acting on their behalf.
async fn ensure_user_exists(state: &AppState, user_id: DbId) -> AppResult<()> {
    if !UserRepo::exists(&state.pool, user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Listing / retrieval
// ---------------------------------------------------------------------------

/// GET /api/v1/ideas
///
/// List all ideas in id order. Returns an empty array when there are none.
pub async fn list_ideas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ideas = IdeaRepo::list_all(&state.pool).await?;

    let projected: Vec<PublicIdea> = ideas.into_iter().map(PublicIdea::from).collect();
    Ok(Json(projected))
}

/// GET /api/v1/ideas/{id}
///
/// Fetch a single idea.
pub async fn get_idea(
    State(state): State<AppState>,
    Path(idea_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let idea = IdeaRepo::get(&state.pool, idea_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Idea",
            id: idea_id,
        }))?;

    Ok(Json(PublicIdea::from(idea)))
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// POST /api/v1/ideas
///
/// Create a new idea (unlocked, zero votes). The stored row records the
/// author; the response does not.
pub async fn create_idea(
    State(state): State<AppState>,
    Json(input): Json<CreateIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content).map_err(AppError::Core)?;
    ensure_user_exists(&state, input.user_id).await?;

    let idea = IdeaRepo::insert(&state.pool, input.user_id, &input.content).await?;

    tracing::info!(idea_id = idea.id, "Idea created");

    Ok((StatusCode::CREATED, Json(PublicIdea::from(idea))))
}

// ---------------------------------------------------------------------------
// Locking
// ---------------------------------------------------------------------------

/// POST /api/v1/ideas/{id}/lock
///
/// Attempt to take the exclusive edit lock on an idea. Returns 409 if the
/// idea is already locked -- by anyone, including the requester.
pub async fn lock_idea(
    State(state): State<AppState>,
    Path(idea_id): Path<DbId>,
    Json(input): Json<LockIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state, input.user_id).await?;

    let locked = IdeaRepo::try_lock(&state.pool, idea_id, input.user_id).await?;

    match locked {
        Some(idea) => {
            tracing::info!(idea_id, user_id = input.user_id, "Lock acquired");
            Ok(Json(PublicIdea::from(idea)))
        }
        // The conditional update matched nothing: the idea is missing or
        // already locked. Re-read to name the error.
        None => Err(lock_failure(&state, idea_id, input.user_id, LockOp::Acquire).await),
    }
}

/// POST /api/v1/ideas/{id}/unlock
///
/// Release a held lock. Only the holder can release: 409 if the idea is
/// not locked at all, 403 if it is locked by someone else.
pub async fn unlock_idea(
    State(state): State<AppState>,
    Path(idea_id): Path<DbId>,
    Json(input): Json<LockIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state, input.user_id).await?;

    let unlocked = IdeaRepo::unlock(&state.pool, idea_id, input.user_id).await?;

    match unlocked {
        Some(idea) => {
            tracing::info!(idea_id, user_id = input.user_id, "Lock released");
            Ok(Json(PublicIdea::from(idea)))
        }
        None => Err(lock_failure(&state, idea_id, input.user_id, LockOp::Release).await),
    }
}

enum LockOp {
    Acquire,
    Release,
}

/// Explain a failed conditional lock update.
///
/// Re-reads the row and runs the requested transition through the pure
/// state machine, which yields the precise rejection.
async fn lock_failure(state: &AppState, idea_id: DbId, user_id: DbId, op: LockOp) -> AppError {
    let idea = match IdeaRepo::get(&state.pool, idea_id).await {
        Ok(Some(idea)) => idea,
        Ok(None) => {
            return AppError::Core(CoreError::NotFound {
                entity: "Idea",
                id: idea_id,
            })
        }
        Err(err) => return AppError::Database(err),
    };

    match LockState::from_columns(idea.is_locked, idea.locked_by_id) {
        Ok(lock_state) => explain_lock_failure(lock_state, user_id, op),
        Err(err) => AppError::Core(err),
    }
}

/// Map a re-read lock state to the error for a failed conditional update.
///
/// A transition that succeeds on re-read means the row changed hands
/// between the update and the read; the request still lost to concurrent
/// activity, so that arm is a conflict like any other contended attempt.
fn explain_lock_failure(lock_state: LockState, user_id: DbId, op: LockOp) -> AppError {
    let decision = match op {
        LockOp::Acquire => lock_state.acquire(user_id),
        LockOp::Release => lock_state.release(user_id),
    };

    match decision {
        Err(err) => AppError::Core(err),
        Ok(_) => AppError::Core(CoreError::Conflict(
            "Idea lock changed concurrently".into(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Voting
// ---------------------------------------------------------------------------

/// POST /api/v1/ideas/{id}/vote
///
/// Cast a vote on an idea. One vote per user per idea; a duplicate vote
/// is a 409.
pub async fn vote_idea(
    State(state): State<AppState>,
    Path(idea_id): Path<DbId>,
    Json(input): Json<VoteIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state, input.user_id).await?;

    // Check the idea up front so a missing idea is a 404, not a foreign
    // key violation from the vote insert.
    if IdeaRepo::get(&state.pool, idea_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Idea",
            id: idea_id,
        }));
    }

    let voted = VoteRepo::cast(&state.pool, idea_id, input.user_id, input.direction).await?;

    match voted {
        Some(idea) => {
            tracing::info!(
                idea_id,
                user_id = input.user_id,
                direction = ?input.direction,
                "Vote cast"
            );
            Ok(Json(PublicIdea::from(idea)))
        }
        None => Err(AppError::Core(CoreError::Conflict(
            "User has already voted on this idea".into(),
        ))),
    }
}
