// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_comment;
mod postgres_post;

pub(crate) use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_post::PostgresPostRepository;
