// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use kiji_core::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryUpdate, CategoryWriteRepository,
    NewCategory,
};
use kiji_core::domain::errors::{DomainError, DomainResult};
use kiji_core::domain::slug::{Slug, SlugProbe};

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
    next_id: AtomicI64,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(vec![]),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn all(&self) -> Vec<Category> {
        self.categories.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut categories = self.categories.lock().expect("mutex poisoned");
        if categories
            .iter()
            .any(|c| c.slug.as_str() == category.slug.as_str())
        {
            return Err(DomainError::SlugConflict(
                "category slug already exists".into(),
            ));
        }
        let id = CategoryId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Category {
            id,
            title: category.title,
            slug: category.slug,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        categories.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut categories = self.categories.lock().expect("mutex poisoned");
        let category = categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(title) = update.title {
            category.title = title;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut categories = self.categories.lock().expect("mutex poisoned");
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugProbe for InMemoryCategoryRepository {
    async fn slug_exists(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        let categories = self.categories.lock().expect("mutex poisoned");
        Ok(categories.iter().any(|c| {
            c.slug.as_str() == candidate.as_str() && exclude != Some(i64::from(c.id))
        }))
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let categories = self.categories.lock().expect("mutex poisoned");
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let categories = self.categories.lock().expect("mutex poisoned");
        Ok(categories
            .iter()
            .find(|c| c.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.all();
        categories.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(categories)
    }
}
