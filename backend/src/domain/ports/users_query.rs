//! Driving port for reading users.
//!
//! Inbound adapters use this port to fetch user data without importing
//! outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{DomainError, User, UserId};

/// Domain use-case port for user reads.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user.
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;

    /// Return one user, or `None` when no user has `id`.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, DomainError>;
}
