// src/domain/slug/service.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{MAX_SLUG_LEN, Slug, clip_base};

/// Read-only uniqueness probe over one entity collection. `exclude`
/// lets an update keep the slug its own row already holds.
#[async_trait]
pub trait SlugProbe: Send + Sync {
    async fn slug_exists(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool>;
}

/// Domain service producing a unique slug for one entity collection.
///
/// An explicit candidate is validated and probed once; a taken explicit
/// candidate is a hard conflict. Auto-generated candidates walk
/// `base`, `base-1`, `base-2`, ... until the probe reports a free slot.
pub struct SlugResolver<P: ?Sized> {
    probe: Arc<P>,
    generator: Arc<dyn SlugGenerator>,
    kind: &'static str,
}

impl<P: SlugProbe + ?Sized> SlugResolver<P> {
    pub fn new(probe: Arc<P>, generator: Arc<dyn SlugGenerator>, kind: &'static str) -> Self {
        Self {
            probe,
            generator,
            kind,
        }
    }

    pub async fn resolve(
        &self,
        title: &str,
        explicit: Option<&str>,
        exclude: Option<i64>,
    ) -> DomainResult<Slug> {
        if let Some(raw) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
            let slug = Slug::new(raw)?;
            if self.probe.slug_exists(&slug, exclude).await? {
                return Err(DomainError::SlugConflict(format!(
                    "{} slug \"{slug}\" is already taken",
                    self.kind
                )));
            }
            return Ok(slug);
        }

        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        let base = self.generator.slugify(title);
        let base = if base.is_empty() {
            // Titles made of nothing but symbols slugify to "".
            format!("{}-{}", self.kind, Utc::now().timestamp())
        } else {
            base
        };
        let base = clip_base(&base, MAX_SLUG_LEN).to_string();

        let candidate = Slug::new(base.clone())?;
        if !self.probe.slug_exists(&candidate, exclude).await? {
            return Ok(candidate);
        }

        // Bounded by the number of existing rows sharing this base,
        // plus one.
        let mut counter = 1u64;
        loop {
            let suffix = format!("-{counter}");
            let head = clip_base(&base, MAX_SLUG_LEN - suffix.len());
            let candidate = Slug::new(format!("{head}{suffix}"))?;
            if !self.probe.slug_exists(&candidate, exclude).await? {
                return Ok(candidate);
            }
            counter += 1;
        }
    }
}
