//! Driving port for user writes.

use async_trait::async_trait;

use crate::domain::{DomainError, User, UserDraft, UserId};

/// Domain use-case port for creating, replacing and deleting users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user.
    async fn create_user(&self, draft: UserDraft) -> Result<User, DomainError>;

    /// Replace the fields of user `id`; `None` when it does not exist.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<Option<User>, DomainError>;

    /// Delete user `id`; `false` when it does not exist.
    async fn delete_user(&self, id: UserId) -> Result<bool, DomainError>;
}
