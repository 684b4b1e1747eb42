// src/domain/post/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{PostContent, PostId, PostStatus, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub status: PostStatus,
    pub active: bool,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published && self.active
    }

    pub fn set_content(&mut self, title: PostTitle, content: PostContent, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_status(&mut self, status: PostStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub status: PostStatus,
    pub active: bool,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    /// Tag titles; unknown titles are created during insert.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<Slug>,
    pub content: Option<PostContent>,
    pub status: Option<PostStatus>,
    pub category_id: Option<Option<CategoryId>>,
    /// `Some` replaces the full tag set, `None` leaves it untouched.
    pub tags: Option<Vec<String>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            status: None,
            category_id: None,
            tags: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
