// src/application/commands/categories/create.rs
use super::service::CategoryCommandService;
use crate::{
    application::{
        commands::SLUG_INSERT_ATTEMPTS,
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::{
        category::{CategoryTitle, NewCategory},
        errors::DomainError,
    },
};

pub struct CreateCategoryCommand {
    pub title: String,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        _actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let title = CategoryTitle::new(command.title)?;
        let explicit_slug = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let mut attempt = 1;
        loop {
            let slug = self
                .slug_resolver
                .resolve(title.as_str(), explicit_slug, None)
                .await?;

            let now = self.clock.now();
            let new_category = NewCategory {
                title: title.clone(),
                slug,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_category).await {
                Ok(category) => return Ok(category.into()),
                Err(DomainError::SlugConflict(_))
                    if explicit_slug.is_none() && attempt < SLUG_INSERT_ATTEMPTS =>
                {
                    tracing::warn!(attempt, title = %title, "category slug raced at commit, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
