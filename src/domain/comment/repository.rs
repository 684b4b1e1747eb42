use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use crate::domain::slug::{Slug, SlugProbe};
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentReadRepository: SlugProbe {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Comment>>;
    /// Active comments for a post, newest first.
    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>>;
}
