//! Integration tests for vote casting and the aggregate counter.

use sqlx::PgPool;

use ideaboard_core::vote::VoteDirection;
use ideaboard_db::repositories::{IdeaRepo, UserRepo, VoteRepo};

#[sqlx::test]
async fn up_vote_increments_counter(pool: PgPool) {
    let user = UserRepo::insert(&pool, "testuser").await.unwrap();
    let idea = IdeaRepo::insert(&pool, user.id, "votable").await.unwrap();

    let updated = VoteRepo::cast(&pool, idea.id, user.id, VoteDirection::Up)
        .await
        .unwrap()
        .expect("first vote must be recorded");

    assert_eq!(updated.vote_count, 1);
    assert_eq!(VoteRepo::count_for_idea(&pool, idea.id).await.unwrap(), 1);

    // The recorded row carries the signed direction.
    let vote = VoteRepo::find(&pool, user.id, idea.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vote.direction, 1);
}

#[sqlx::test]
async fn duplicate_vote_is_refused(pool: PgPool) {
    let user = UserRepo::insert(&pool, "testuser").await.unwrap();
    let idea = IdeaRepo::insert(&pool, user.id, "votable").await.unwrap();

    VoteRepo::cast(&pool, idea.id, user.id, VoteDirection::Up)
        .await
        .unwrap()
        .unwrap();

    // Same user, same idea: refused regardless of direction.
    assert!(VoteRepo::cast(&pool, idea.id, user.id, VoteDirection::Down)
        .await
        .unwrap()
        .is_none());

    // Counter unchanged by the refused vote.
    let fetched = IdeaRepo::get(&pool, idea.id).await.unwrap().unwrap();
    assert_eq!(fetched.vote_count, 1);
    assert_eq!(VoteRepo::count_for_idea(&pool, idea.id).await.unwrap(), 1);
}

#[sqlx::test]
async fn down_vote_on_zero_count_is_clamped(pool: PgPool) {
    let user = UserRepo::insert(&pool, "testuser").await.unwrap();
    let idea = IdeaRepo::insert(&pool, user.id, "votable").await.unwrap();

    let updated = VoteRepo::cast(&pool, idea.id, user.id, VoteDirection::Down)
        .await
        .unwrap()
        .unwrap();

    // The vote row is recorded but the aggregate never goes negative.
    assert_eq!(updated.vote_count, 0);
    assert_eq!(VoteRepo::count_for_idea(&pool, idea.id).await.unwrap(), 1);
}

#[sqlx::test]
async fn concurrent_votes_by_different_users_are_all_counted(pool: PgPool) {
    let author = UserRepo::insert(&pool, "author").await.unwrap();
    let idea = IdeaRepo::insert(&pool, author.id, "popular").await.unwrap();

    let voter_a = UserRepo::insert(&pool, "voter_a").await.unwrap().id;
    let voter_b = UserRepo::insert(&pool, "voter_b").await.unwrap().id;

    let (res_a, res_b) = tokio::join!(
        VoteRepo::cast(&pool, idea.id, voter_a, VoteDirection::Up),
        VoteRepo::cast(&pool, idea.id, voter_b, VoteDirection::Up),
    );
    assert!(res_a.unwrap().is_some());
    assert!(res_b.unwrap().is_some());

    // No lost update: both increments landed.
    let fetched = IdeaRepo::get(&pool, idea.id).await.unwrap().unwrap();
    assert_eq!(fetched.vote_count, 2);
}

#[sqlx::test]
async fn vote_on_missing_idea_is_an_error(pool: PgPool) {
    let user = UserRepo::insert(&pool, "testuser").await.unwrap();

    // FK violation from the votes insert.
    assert!(VoteRepo::cast(&pool, 9999, user.id, VoteDirection::Up)
        .await
        .is_err());
}
