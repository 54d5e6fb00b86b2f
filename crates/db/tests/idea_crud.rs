//! Integration tests for idea CRUD at the repository layer.
//!
//! Exercises insert/get/list against a real database, including the
//! schema-level invariants (non-empty content, stored authorship).

use sqlx::PgPool;

use ideaboard_db::repositories::{IdeaRepo, UserRepo};

#[sqlx::test]
async fn list_is_empty_on_fresh_database(pool: PgPool) {
    let ideas = IdeaRepo::list_all(&pool).await.unwrap();
    assert!(ideas.is_empty());
}

#[sqlx::test]
async fn insert_persists_content_and_author(pool: PgPool) {
    let user = UserRepo::insert(&pool, "testuser").await.unwrap();

    let idea = IdeaRepo::insert(&pool, user.id, "This is a new idea.")
        .await
        .unwrap();

    assert_eq!(idea.content, "This is a new idea.");
    assert_eq!(idea.user_id, user.id);
    assert!(!idea.is_locked);
    assert_eq!(idea.locked_by_id, None);
    assert_eq!(idea.vote_count, 0);

    // The stored row keeps the author link for internal bookkeeping.
    let fetched = IdeaRepo::get(&pool, idea.id).await.unwrap().unwrap();
    assert_eq!(fetched.user_id, user.id);
}

#[sqlx::test]
async fn get_missing_idea_returns_none(pool: PgPool) {
    assert!(IdeaRepo::get(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test]
async fn list_returns_ideas_in_id_order(pool: PgPool) {
    let user = UserRepo::insert(&pool, "testuser").await.unwrap();

    let first = IdeaRepo::insert(&pool, user.id, "first").await.unwrap();
    let second = IdeaRepo::insert(&pool, user.id, "second").await.unwrap();

    let ideas = IdeaRepo::list_all(&pool).await.unwrap();
    assert_eq!(
        ideas.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[sqlx::test]
async fn empty_content_is_rejected_at_rest(pool: PgPool) {
    let user = UserRepo::insert(&pool, "testuser").await.unwrap();

    // The CHECK constraint backs up the boundary validation.
    let result = IdeaRepo::insert(&pool, user.id, "   ").await;
    assert!(result.is_err());
}

#[sqlx::test]
async fn user_existence_check(pool: PgPool) {
    let user = UserRepo::insert(&pool, "testuser").await.unwrap();

    assert!(UserRepo::exists(&pool, user.id).await.unwrap());
    assert!(!UserRepo::exists(&pool, user.id + 1).await.unwrap());

    let fetched = UserRepo::get(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(fetched.username, "testuser");
    assert!(UserRepo::get(&pool, user.id + 1).await.unwrap().is_none());
}
