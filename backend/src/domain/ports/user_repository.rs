//! Driven port for user persistence and its error type.
//!
//! Absence is not an error here: lookups, updates and deletes that match no
//! row return `None`/`false` and leave the not-found decision to the caller.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached.
        Connection {
            /// Driver or pool message.
            message: String,
        } => "user repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query {
            /// Driver message.
            message: String,
        } => "user repository query failed: {message}",
    }
}

/// Single-table user storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user, ordered by id.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a new row and return it with the store-assigned id.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite the client-supplied fields of an existing user.
    async fn update_by_id(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a user, returning whether a row was deleted.
    async fn delete_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
