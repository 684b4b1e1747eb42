// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentContent, CommentId, CommentTitle};
use crate::domain::post::PostId;
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub title: CommentTitle,
    pub slug: Slug,
    pub content: CommentContent,
    pub author_id: UserId,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn set_title(&mut self, title: CommentTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, content: CommentContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }

    pub fn set_active(&mut self, active: bool, now: DateTime<Utc>) {
        self.active = active;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub title: CommentTitle,
    pub slug: Slug,
    pub content: CommentContent,
    pub author_id: UserId,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub title: Option<CommentTitle>,
    pub slug: Option<Slug>,
    pub content: Option<CommentContent>,
    pub active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl CommentUpdate {
    pub fn new(id: CommentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            active: None,
            updated_at,
        }
    }
}
