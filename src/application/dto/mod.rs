pub mod auth;
pub mod categories;
pub mod comments;
pub mod posts;

pub use auth::AuthenticatedUser;
pub use categories::CategoryDto;
pub use comments::CommentDto;
pub use posts::{PostDto, TagDto};
