// src/application/commands/categories/update.rs
use super::service::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryTitle, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        _actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let title_opt = command.title.map(CategoryTitle::new).transpose()?;
        let explicit_slug = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let title_changed = title_opt
            .as_ref()
            .is_some_and(|t| t.as_str() != category.title.as_str());

        let effective_title = title_opt.as_ref().unwrap_or(&category.title);
        let slug_opt = if explicit_slug.is_some() || title_changed {
            Some(
                self.slug_resolver
                    .resolve(effective_title.as_str(), explicit_slug, Some(id.into()))
                    .await?,
            )
        } else {
            None
        };

        let update = CategoryUpdate {
            id,
            title: title_opt,
            slug: slug_opt,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
