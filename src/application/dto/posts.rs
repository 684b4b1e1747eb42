use crate::domain::post::{Post, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub title: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            title: tag.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: String,
    pub active: bool,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            status: post.status.as_str().to_string(),
            active: post.active,
            author_id: post.author_id.into(),
            category_id: post.category_id.map(Into::into),
            tags: post.tags.into_iter().map(Into::into).collect(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
