pub mod categories;
pub mod comments;
pub mod posts;

/// How many times a create path may re-resolve and re-insert after the
/// storage layer reports a slug collision that the pre-check missed
/// (two requests racing on the same title).
pub(crate) const SLUG_INSERT_ATTEMPTS: u32 = 3;
