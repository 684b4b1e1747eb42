// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, comments::CommentCommandService,
            posts::PostCommandService,
        },
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            categories::CategoryQueryService, comments::CommentQueryService,
            posts::PostQueryService,
        },
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        comment::{CommentReadRepository, CommentWriteRepository},
        post::{PostReadRepository, PostWriteRepository},
        slug::SlugResolver,
    },
};

/// One aggregate wiring every command and query service to its
/// repositories and to a per-collection slug resolver.
pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        category_write_repo: Arc<dyn CategoryWriteRepository>,
        category_read_repo: Arc<dyn CategoryReadRepository>,
        comment_write_repo: Arc<dyn CommentWriteRepository>,
        comment_read_repo: Arc<dyn CommentReadRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let post_slugs = Arc::new(SlugResolver::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
            "post",
        ));
        let category_slugs = Arc::new(SlugResolver::new(
            Arc::clone(&category_read_repo),
            Arc::clone(&slugger),
            "category",
        ));
        let comment_slugs = Arc::new(SlugResolver::new(
            Arc::clone(&comment_read_repo),
            Arc::clone(&slugger),
            "comment",
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&category_read_repo),
            post_slugs,
            Arc::clone(&clock),
        ));
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_write_repo),
            Arc::clone(&category_read_repo),
            category_slugs,
            Arc::clone(&clock),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_write_repo),
            Arc::clone(&comment_read_repo),
            Arc::clone(&post_read_repo),
            comment_slugs,
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_read_repo)));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_read_repo),
            Arc::clone(&post_read_repo),
        ));

        Self {
            post_commands,
            category_commands,
            comment_commands,
            post_queries,
            category_queries,
            comment_queries,
        }
    }
}
