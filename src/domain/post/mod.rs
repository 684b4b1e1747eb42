pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate, Tag};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PostContent, PostId, PostStatus, PostTitle};
