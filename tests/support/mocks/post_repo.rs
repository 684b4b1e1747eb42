// tests/support/mocks/post_repo.rs
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use kiji_core::domain::errors::{DomainError, DomainResult};
use kiji_core::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWriteRepository, Tag,
};
use kiji_core::domain::slug::{Slug, SlugProbe};

/// In-memory post store. `pending_race_slugs` simulates a concurrent
/// writer: those slugs are invisible to the probe, conflict on insert,
/// and become visible (promoted to `committed_race_slugs`) afterwards,
/// which is exactly how a lost commit race looks to the resolver.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicI64,
    next_tag_id: AtomicI64,
    tag_ids: Mutex<HashMap<String, i64>>,
    pending_race_slugs: Mutex<HashSet<String>>,
    committed_race_slugs: Mutex<HashSet<String>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            next_tag_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    /// Registers a slug a simulated concurrent request will commit
    /// just before our next insert of the same value.
    pub fn stage_race(&self, slug: &str) {
        self.pending_race_slugs
            .lock()
            .expect("mutex poisoned")
            .insert(slug.to_string());
    }

    pub fn all(&self) -> Vec<Post> {
        self.posts.lock().expect("mutex poisoned").clone()
    }

    fn resolve_tags(&self, titles: &[String]) -> Vec<Tag> {
        let mut ids = self.tag_ids.lock().expect("mutex poisoned");
        titles
            .iter()
            .map(|raw| raw.trim())
            .filter(|t| !t.is_empty())
            .map(|title| {
                let id = *ids
                    .entry(title.to_string())
                    .or_insert_with(|| self.next_tag_id.fetch_add(1, Ordering::SeqCst));
                Tag {
                    id,
                    title: title.to_string(),
                }
            })
            .collect()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        {
            let mut pending = self.pending_race_slugs.lock().expect("mutex poisoned");
            if pending.remove(post.slug.as_str()) {
                self.committed_race_slugs
                    .lock()
                    .expect("mutex poisoned")
                    .insert(post.slug.as_str().to_string());
                return Err(DomainError::SlugConflict("post slug already exists".into()));
            }
        }

        let mut posts = self.posts.lock().expect("mutex poisoned");
        let committed = self.committed_race_slugs.lock().expect("mutex poisoned");
        if committed.contains(post.slug.as_str())
            || posts.iter().any(|p| p.slug.as_str() == post.slug.as_str())
        {
            return Err(DomainError::SlugConflict("post slug already exists".into()));
        }

        let id = PostId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let tags = self.resolve_tags(&post.tags);
        let stored = Post {
            id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            status: post.status,
            active: post.active,
            author_id: post.author_id,
            category_id: post.category_id,
            tags,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let tags = update.tags.as_deref().map(|t| self.resolve_tags(t));
        let mut posts = self.posts.lock().expect("mutex poisoned");
        let post = posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if post.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "post update conflict, please retry".into(),
            ));
        }
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        if let Some(category_id) = update.category_id {
            post.category_id = category_id;
        }
        if let Some(tags) = tags {
            post.tags = tags;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().expect("mutex poisoned");
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugProbe for InMemoryPostRepository {
    async fn slug_exists(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        let committed = self.committed_race_slugs.lock().expect("mutex poisoned");
        if committed.contains(candidate.as_str()) {
            return Ok(true);
        }
        let posts = self.posts.lock().expect("mutex poisoned");
        Ok(posts.iter().any(|p| {
            p.slug.as_str() == candidate.as_str() && exclude != Some(i64::from(p.id))
        }))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let posts = self.posts.lock().expect("mutex poisoned");
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let posts = self.posts.lock().expect("mutex poisoned");
        Ok(posts.iter().find(|p| p.slug.as_str() == slug.as_str()).cloned())
    }

    async fn list(&self, include_drafts: bool, limit: u32) -> DomainResult<Vec<Post>> {
        let posts = self.posts.lock().expect("mutex poisoned");
        let mut visible: Vec<Post> = posts
            .iter()
            .filter(|p| p.active && (include_drafts || p.is_published()))
            .cloned()
            .collect();
        visible.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        visible.truncate(limit as usize);
        Ok(visible)
    }
}
