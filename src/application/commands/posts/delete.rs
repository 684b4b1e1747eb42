// src/application/commands/posts/delete.rs
use super::service::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        _actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
