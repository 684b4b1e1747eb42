// src/application/dto/auth.rs
use crate::domain::user::UserId;

/// The already-authenticated caller. Authentication itself happens in
/// the surrounding web layer; commands only need to know who acts.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
