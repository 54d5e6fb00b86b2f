pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ideas                   list (GET), create (POST)
/// /ideas/{id}              get (GET)
/// /ideas/{id}/lock         acquire the exclusive edit lock (POST)
/// /ideas/{id}/unlock       release a held lock (POST)
/// /ideas/{id}/vote         cast a vote (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ideas",
            get(handlers::ideas::list_ideas).post(handlers::ideas::create_idea),
        )
        .route("/ideas/{id}", get(handlers::ideas::get_idea))
        .route("/ideas/{id}/lock", post(handlers::ideas::lock_idea))
        .route("/ideas/{id}/unlock", post(handlers::ideas::unlock_idea))
        .route("/ideas/{id}/vote", post(handlers::ideas::vote_idea))
}
