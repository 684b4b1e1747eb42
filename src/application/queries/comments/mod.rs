mod list_by_post;
mod service;

pub use list_by_post::ListCommentsByPostQuery;
pub use service::CommentQueryService;
