// src/application/commands/comments/create.rs
use super::service::CommentCommandService;
use crate::{
    application::{
        commands::SLUG_INSERT_ATTEMPTS,
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentContent, CommentTitle, NewComment},
        errors::DomainError,
        slug::Slug,
    },
};

pub struct CreateCommentCommand {
    /// Slug of the post being commented on.
    pub post_slug: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let content = CommentContent::new(command.content)?;
        let title = match command.title.filter(|t| !t.trim().is_empty()) {
            Some(raw) => CommentTitle::new(raw)?,
            None => CommentTitle::derive_from(&content),
        };
        let explicit_slug = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let post_slug = Slug::new(command.post_slug)?;
        let post = self
            .post_repo
            .find_by_slug(&post_slug)
            .await?
            .filter(|post| post.is_published())
            .ok_or_else(|| ApplicationError::not_found("no post found with the given slug"))?;

        let mut attempt = 1;
        loop {
            let slug = self
                .slug_resolver
                .resolve(title.as_str(), explicit_slug, None)
                .await?;

            let now = self.clock.now();
            let new_comment = NewComment {
                post_id: post.id,
                title: title.clone(),
                slug,
                content: content.clone(),
                author_id: actor.id,
                active: true,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_comment).await {
                Ok(comment) => return Ok(comment.into()),
                Err(DomainError::SlugConflict(_))
                    if explicit_slug.is_none() && attempt < SLUG_INSERT_ATTEMPTS =>
                {
                    tracing::warn!(attempt, title = %title, "comment slug raced at commit, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
