// src/application/commands/categories/delete.rs
use super::service::CategoryCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        _actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
