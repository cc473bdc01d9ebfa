//! User domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports on top of
//! a [`UserRepository`]. Each call is exactly one repository call; the service
//! only translates persistence failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{DomainError, User, UserDraft, UserId};

fn map_persistence_error(error: UserPersistenceError) -> DomainError {
    match error {
        UserPersistenceError::Connection { message } => {
            warn!(%message, "user repository unavailable");
            DomainError::service_unavailable("user store is unavailable")
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user repository query failed");
            DomainError::internal(format!("user repository error: {message}"))
        }
    }
}

/// Service implementing the user driving ports.
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> UserService<R> {
    /// Create a service over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, DomainError> {
        self.repository
            .create(&draft)
            .await
            .map_err(map_persistence_error)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<Option<User>, DomainError> {
        self.repository
            .update_by_id(id, &draft)
            .await
            .map_err(map_persistence_error)
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, DomainError> {
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
