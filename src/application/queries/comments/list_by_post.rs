// src/application/queries/comments/list_by_post.rs
use super::service::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct ListCommentsByPostQuery {
    pub post_slug: String,
}

impl CommentQueryService {
    /// Active comments for a published post, newest first.
    pub async fn list_comments_by_post(
        &self,
        query: ListCommentsByPostQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let slug = Slug::new(query.post_slug)?;
        let post = self
            .post_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.is_published())
            .ok_or_else(|| ApplicationError::not_found("no post found with the given slug"))?;

        let comments = self.read_repo.list_by_post(post.id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
