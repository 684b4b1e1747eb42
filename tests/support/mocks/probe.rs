// tests/support/mocks/probe.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use kiji_core::domain::errors::DomainResult;
use kiji_core::domain::slug::{Slug, SlugProbe};

/// Probe over a fixed slug -> owner-id map, for resolver-level tests.
#[derive(Default)]
pub struct StaticProbe {
    taken: Mutex<HashMap<String, i64>>,
}

impl StaticProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_taken(entries: &[(&str, i64)]) -> Self {
        let probe = Self::new();
        {
            let mut guard = probe.taken.lock().expect("mutex poisoned");
            for (slug, owner) in entries {
                guard.insert((*slug).to_string(), *owner);
            }
        }
        probe
    }

    pub fn mark_taken(&self, slug: &str, owner: i64) {
        self.taken
            .lock()
            .expect("mutex poisoned")
            .insert(slug.to_string(), owner);
    }
}

#[async_trait]
impl SlugProbe for StaticProbe {
    async fn slug_exists(&self, candidate: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
        let guard = self.taken.lock().expect("mutex poisoned");
        Ok(match guard.get(candidate.as_str()) {
            Some(owner) => exclude != Some(*owner),
            None => false,
        })
    }
}
