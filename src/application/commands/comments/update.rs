// src/application/commands/comments/update.rs
use super::service::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{CommentContent, CommentId, CommentTitle, CommentUpdate},
};

pub struct UpdateCommentCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub active: Option<bool>,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        _actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(command.id)?;
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let title_opt = command.title.map(CommentTitle::new).transpose()?;
        let content_opt = command.content.map(CommentContent::new).transpose()?;

        // The slug follows the title; an unchanged title keeps it.
        let title_changed = title_opt
            .as_ref()
            .is_some_and(|t| t.as_str() != comment.title.as_str());
        let slug_opt = if title_changed {
            let title = title_opt.as_ref().map_or(&comment.title, |t| t);
            Some(
                self.slug_resolver
                    .resolve(title.as_str(), None, Some(id.into()))
                    .await?,
            )
        } else {
            None
        };

        let update = CommentUpdate {
            id,
            title: title_opt,
            slug: slug_opt,
            content: content_opt,
            active: command.active,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
