// src/application/commands/comments/delete.rs
use super::service::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        _actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let id = CommentId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
