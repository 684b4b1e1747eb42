// src/application/queries/categories/list.rs
use super::service::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

impl CategoryQueryService {
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.read_repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
