// tests/support/mocks/mod.rs
pub mod category_repo;
pub mod comment_repo;
pub mod post_repo;
pub mod probe;
pub mod time;
