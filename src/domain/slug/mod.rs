pub mod service;

pub use service::{SlugProbe, SlugResolver};

use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Unified slug policy: one length cap shared by posts, categories,
/// and comments.
pub const MAX_SLUG_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Normalizes (trim + lowercase) and validates a stored or
    /// client-supplied slug value.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_ascii_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {MAX_SLUG_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits, and hyphens".into(),
            ));
        }
        if value.starts_with('-') || value.ends_with('-') {
            return Err(DomainError::Validation(
                "slug cannot start or end with a hyphen".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Cuts an already-slugified base down to `max` bytes without leaving a
/// trailing hyphen. Slugified text is ASCII, so byte slicing is safe.
pub(crate) fn clip_base(base: &str, max: usize) -> &str {
    if base.len() <= max {
        base
    } else {
        base[..max].trim_end_matches('-')
    }
}
