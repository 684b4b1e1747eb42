// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentReadRepository, CommentTitle, CommentUpdate,
    CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::slug::{Slug, SlugProbe};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COMMENT_COLUMNS: &str =
    "id, post_id, title, slug, content, author_id, active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    title: String,
    slug: String,
    content: String,
    author_id: i64,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            title: CommentTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: CommentContent::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            post_id,
            title,
            slug,
            content,
            author_id,
            active,
            created_at,
            updated_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (post_id, title, slug, content, author_id, active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COMMENT_COLUMNS}",
        ))
        .bind(i64::from(post_id))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(active)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let CommentUpdate {
            id,
            title,
            slug,
            content,
            active,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE comments SET updated_at = ");
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

        if let Some(active) = active {
            builder.push(", active = ");
            builder.push_bind(active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {COMMENT_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<CommentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugProbe for PostgresCommentRepository {
    async fn slug_exists(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM comments
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
impl CommentReadRepository for PostgresCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE post_id = $1 AND active
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(post_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
