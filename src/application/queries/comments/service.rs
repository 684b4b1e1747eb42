// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::domain::{comment::CommentReadRepository, post::PostReadRepository};

pub struct CommentQueryService {
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
}

impl CommentQueryService {
    pub fn new(
        read_repo: Arc<dyn CommentReadRepository>,
        post_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            post_repo,
        }
    }
}
