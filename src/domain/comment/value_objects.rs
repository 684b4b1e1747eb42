use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_COMMENT_TITLE_LEN: usize = 100;
pub const MIN_COMMENT_CONTENT_LEN: usize = 10;
pub const MAX_COMMENT_CONTENT_LEN: usize = 500;

/// Length of the content prefix used when a comment arrives without a
/// title.
const AUTO_TITLE_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTitle(String);

impl CommentTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if value.chars().count() > MAX_COMMENT_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {MAX_COMMENT_TITLE_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    /// Derives a title from the leading content when none was supplied.
    pub fn derive_from(content: &CommentContent) -> Self {
        let text = content.as_str();
        let title = if text.chars().count() > AUTO_TITLE_LEN {
            let prefix: String = text.chars().take(AUTO_TITLE_LEN).collect();
            format!("{prefix}...")
        } else {
            text.to_string()
        };
        Self(title)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "comment cannot be empty or just whitespace".into(),
            ));
        }
        let len = trimmed.chars().count();
        if len < MIN_COMMENT_CONTENT_LEN {
            return Err(DomainError::Validation(format!(
                "comment must be at least {MIN_COMMENT_CONTENT_LEN} characters long"
            )));
        }
        if len > MAX_COMMENT_CONTENT_LEN {
            return Err(DomainError::Validation(format!(
                "comment cannot be longer than {MAX_COMMENT_CONTENT_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
