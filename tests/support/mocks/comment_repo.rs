// tests/support/mocks/comment_repo.rs
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use kiji_core::domain::comment::{
    Comment, CommentId, CommentReadRepository, CommentUpdate, CommentWriteRepository, NewComment,
};
use kiji_core::domain::errors::{DomainError, DomainResult};
use kiji_core::domain::post::PostId;
use kiji_core::domain::slug::{Slug, SlugProbe};

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Mutex::new(vec![]),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn all(&self) -> Vec<Comment> {
        self.comments.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().expect("mutex poisoned");
        if comments
            .iter()
            .any(|c| c.slug.as_str() == comment.slug.as_str())
        {
            return Err(DomainError::SlugConflict(
                "comment slug already exists".into(),
            ));
        }
        let id = CommentId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Comment {
            id,
            post_id: comment.post_id,
            title: comment.title,
            slug: comment.slug,
            content: comment.content,
            author_id: comment.author_id,
            active: comment.active,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        };
        comments.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().expect("mutex poisoned");
        let comment = comments
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        if let Some(title) = update.title {
            comment.title = title;
        }
        if let Some(slug) = update.slug {
            comment.slug = slug;
        }
        if let Some(content) = update.content {
            comment.content = content;
        }
        if let Some(active) = update.active {
            comment.active = active;
        }
        comment.updated_at = update.updated_at;
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut comments = self.comments.lock().expect("mutex poisoned");
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugProbe for InMemoryCommentRepository {
    async fn slug_exists(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        let comments = self.comments.lock().expect("mutex poisoned");
        Ok(comments.iter().any(|c| {
            c.slug.as_str() == candidate.as_str() && exclude != Some(i64::from(c.id))
        }))
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let comments = self.comments.lock().expect("mutex poisoned");
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Comment>> {
        let comments = self.comments.lock().expect("mutex poisoned");
        Ok(comments
            .iter()
            .find(|c| c.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let comments = self.comments.lock().expect("mutex poisoned");
        let mut visible: Vec<Comment> = comments
            .iter()
            .filter(|c| c.post_id == post_id && c.active)
            .cloned()
            .collect();
        visible.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(visible)
    }
}
