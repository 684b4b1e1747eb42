// src/application/queries/posts/list.rs
use super::service::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

const MAX_PAGE_SIZE: u32 = 100;

pub struct ListPostsQuery {
    pub include_drafts: bool,
    pub limit: u32,
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self {
            include_drafts: false,
            limit: 20,
        }
    }
}

impl PostQueryService {
    /// Newest posts first; drafts only when explicitly requested.
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let limit = query.limit.clamp(1, MAX_PAGE_SIZE);
        let posts = self.read_repo.list(query.include_drafts, limit).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
