// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        category::CategoryReadRepository,
        post::{PostReadRepository, PostWriteRepository},
        slug::SlugResolver,
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_resolver: Arc<SlugResolver<dyn PostReadRepository>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        slug_resolver: Arc<SlugResolver<dyn PostReadRepository>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_resolver,
            clock,
        }
    }
}
