// src/application/commands/posts/create.rs
use super::service::PostCommandService;
use crate::{
    application::{
        commands::SLUG_INSERT_ATTEMPTS,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        errors::DomainError,
        post::{NewPost, PostContent, PostStatus, PostTitle},
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
    pub status: PostStatus,
    pub category_id: Option<i64>,
    pub tags: Vec<String>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    slug: Option<String>,
    status: Option<PostStatus>,
    category_id: Option<i64>,
    tags: Vec<String>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            slug: self.slug,
            status: self.status.unwrap_or(PostStatus::Draft),
            category_id: self.category_id,
            tags: self.tags,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let explicit_slug = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let category_id = match command.category_id {
            Some(raw) => {
                let id = CategoryId::new(raw)?;
                self.category_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("category not found"))?;
                Some(id)
            }
            None => None,
        };

        let mut attempt = 1;
        loop {
            let slug = self
                .slug_resolver
                .resolve(title.as_str(), explicit_slug, None)
                .await?;

            let now = self.clock.now();
            let new_post = NewPost {
                title: title.clone(),
                slug,
                content: content.clone(),
                status: command.status,
                active: true,
                author_id: actor.id,
                category_id,
                tags: command.tags.clone(),
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(post) => return Ok(post.into()),
                // The probe passed but another creation committed the
                // same slug first; pick the next suffix and try again.
                Err(DomainError::SlugConflict(_))
                    if explicit_slug.is_none() && attempt < SLUG_INSERT_ATTEMPTS =>
                {
                    tracing::warn!(attempt, title = %title, "post slug raced at commit, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
