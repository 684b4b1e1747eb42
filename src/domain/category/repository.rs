use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugProbe};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}

#[async_trait]
pub trait CategoryReadRepository: SlugProbe {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
