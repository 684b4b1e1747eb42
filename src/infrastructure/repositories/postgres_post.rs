// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostId, PostReadRepository, PostStatus, PostTitle, PostUpdate,
    PostWriteRepository, Tag,
};
use crate::domain::slug::{Slug, SlugProbe};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

const POST_COLUMNS: &str =
    "id, title, slug, content, status, active, author_id, category_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    status: String,
    active: bool,
    author_id: i64,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, tags: Vec<Tag>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            content: PostContent::new(self.content)?,
            status: PostStatus::parse(&self.status)?,
            active: self.active,
            author_id: UserId::new(self.author_id)?,
            category_id: self.category_id.map(CategoryId::new).transpose()?,
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    title: String,
}

async fn load_tags(pool: &PgPool, post_id: i64) -> DomainResult<Vec<Tag>> {
    let rows = sqlx::query_as::<_, TagRow>(
        "SELECT t.id, t.title FROM tags t
         JOIN post_tags pt ON pt.tag_id = t.id
         WHERE pt.post_id = $1
         ORDER BY t.title",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    Ok(rows
        .into_iter()
        .map(|row| Tag {
            id: row.id,
            title: row.title,
        })
        .collect())
}

/// Upserts each tag title and links it to the post. Unknown titles are
/// created on the fly; blank titles are skipped.
async fn attach_tags(
    tx: &mut Transaction<'_, Postgres>,
    post_id: i64,
    titles: &[String],
) -> DomainResult<Vec<Tag>> {
    let mut tags = Vec::with_capacity(titles.len());
    for raw in titles {
        let title = raw.trim();
        if title.is_empty() {
            continue;
        }
        let (tag_id,): (i64,) = sqlx::query_as(
            "INSERT INTO tags (title) VALUES ($1)
             ON CONFLICT (title) DO UPDATE SET title = EXCLUDED.title
             RETURNING id",
        )
        .bind(title)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(post_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        tags.push(Tag {
            id: tag_id,
            title: title.to_string(),
        });
    }
    Ok(tags)
}

#[async_trait]
impl PostWriteRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            status,
            active,
            author_id,
            category_id,
            tags,
            created_at,
            updated_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, content, status, active, author_id, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {POST_COLUMNS}",
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(status.as_str())
        .bind(active)
        .bind(i64::from(author_id))
        .bind(category_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let attached = attach_tags(&mut tx, row.id, &tags).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(attached)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            status,
            category_id,
            tags,
            original_updated_at,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }

        if let Some(category) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(format!(" RETURNING {POST_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("post update conflict, please retry".into()))?;

        let attached = if let Some(titles) = tags {
            sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
                .bind(row.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            attach_tags(&mut tx, row.id, &titles).await?
        } else {
            vec![]
        };
        let reload_tags = attached.is_empty();

        tx.commit().await.map_err(map_sqlx)?;

        let tags = if reload_tags {
            load_tags(&self.pool, row.id).await?
        } else {
            attached
        };
        row.into_post(tags)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugProbe for PostgresPostRepository {
    async fn slug_exists(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM posts
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
impl PostReadRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let tags = load_tags(&self.pool, row.id).await?;
                row.into_post(tags).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let tags = load_tags(&self.pool, row.id).await?;
                row.into_post(tags).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn list(&self, include_drafts: bool, limit: u32) -> DomainResult<Vec<Post>> {
        let limit = i64::from(limit.clamp(1, 100));
        let query = if include_drafts {
            format!(
                "SELECT {POST_COLUMNS} FROM posts WHERE active
                 ORDER BY created_at DESC, id DESC LIMIT $1"
            )
        } else {
            format!(
                "SELECT {POST_COLUMNS} FROM posts WHERE active AND status = 'publish'
                 ORDER BY created_at DESC, id DESC LIMIT $1"
            )
        };
        let rows = sqlx::query_as::<_, PostRow>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            let tags = load_tags(&self.pool, row.id).await?;
            posts.push(row.into_post(tags)?);
        }
        Ok(posts)
    }
}
