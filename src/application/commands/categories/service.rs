// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        slug::SlugResolver,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_resolver: Arc<SlugResolver<dyn CategoryReadRepository>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        slug_resolver: Arc<SlugResolver<dyn CategoryReadRepository>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_resolver,
            clock,
        }
    }
}
