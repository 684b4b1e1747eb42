// tests/support/helpers.rs
use std::sync::Arc;

use kiji_core::application::dto::AuthenticatedUser;
use kiji_core::application::services::ApplicationServices;
use kiji_core::domain::user::UserId;
use kiji_core::infrastructure::util::DefaultSlugGenerator;

use crate::support::mocks::category_repo::InMemoryCategoryRepository;
use crate::support::mocks::comment_repo::InMemoryCommentRepository;
use crate::support::mocks::post_repo::InMemoryPostRepository;
use crate::support::mocks::time::FixedClock;

pub fn actor() -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(7).unwrap(), "alice")
}

/// Full application wiring over in-memory repositories and a fixed
/// clock. The raw repositories stay reachable for direct inspection.
pub struct TestEnv {
    pub posts: Arc<InMemoryPostRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub services: ApplicationServices,
}

impl TestEnv {
    pub fn new() -> Self {
        let posts = Arc::new(InMemoryPostRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let comments = Arc::new(InMemoryCommentRepository::new());

        let services = ApplicationServices::new(
            posts.clone(),
            posts.clone(),
            categories.clone(),
            categories.clone(),
            comments.clone(),
            comments.clone(),
            Arc::new(FixedClock),
            Arc::new(DefaultSlugGenerator),
        );

        Self {
            posts,
            categories,
            comments,
            services,
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
