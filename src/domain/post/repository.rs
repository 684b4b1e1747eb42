use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::{Slug, SlugProbe};
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: SlugProbe {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    async fn list(&self, include_drafts: bool, limit: u32) -> DomainResult<Vec<Post>>;
}
