// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryTitle, CategoryUpdate,
    CategoryWriteRepository, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugProbe};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    title: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            title: CategoryTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryWriteRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            title,
            slug,
            created_at,
            updated_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (title, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, slug, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            title,
            slug,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE categories SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, title, slug, created_at, updated_at");

        let maybe_row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugProbe for PostgresCategoryRepository {
    async fn slug_exists(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM categories
                 WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(candidate.as_str())
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(exists)
    }
}

#[async_trait]
impl CategoryReadRepository for PostgresCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, slug, created_at, updated_at FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, slug, created_at, updated_at FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, slug, created_at, updated_at FROM categories ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
