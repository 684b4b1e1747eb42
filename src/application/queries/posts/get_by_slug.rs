// src/application/queries/posts/get_by_slug.rs
use super::service::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Unpublished and deactivated posts read as absent.
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = Slug::new(query.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.is_published())
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }
}
