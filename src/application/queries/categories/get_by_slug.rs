// src/application/queries/categories/get_by_slug.rs
use super::service::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

impl CategoryQueryService {
    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        let slug = Slug::new(query.slug)?;
        let category = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(category.into())
    }
}
