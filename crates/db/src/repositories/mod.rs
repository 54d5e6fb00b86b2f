//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod idea_repo;
pub mod user_repo;
pub mod vote_repo;

pub use idea_repo::IdeaRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
