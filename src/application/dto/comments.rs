use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author_id: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            title: comment.title.into_inner(),
            slug: comment.slug.into_inner(),
            content: comment.content.into_inner(),
            author_id: comment.author_id.into(),
            active: comment.active,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
