//! In-memory `UserRepository` used as a test double.
//!
//! Ids are assigned from a counter starting at 1 and are never reused, which
//! mirrors a `SERIAL` column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug)]
struct State {
    next_id: i32,
    rows: BTreeMap<UserId, User>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Process-local user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.state().rows.values().cloned().collect())
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.state();
        let id = UserId::new(state.next_id);
        state.next_id = state
            .next_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        let now = Utc::now();
        let user = User::new(id, draft.clone(), now, now);
        state.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.state().rows.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.state();
        let Some(existing) = state.rows.get_mut(&id) else {
            return Ok(None);
        };
        *existing = existing.with_draft(draft.clone(), Utc::now());
        Ok(Some(existing.clone()))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.state().rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn draft(first_name: &str) -> UserDraft {
        UserDraft::try_from_optional(Some(first_name), Some("Lee"), Some("1990-01-01"))
            .expect("valid draft")
    }

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn create_then_find_returns_equal_record(repo: InMemoryUserRepository) {
        let created = repo.create(&draft("Ann")).await.expect("create");
        let found = repo.find_by_id(created.id()).await.expect("find");
        assert_eq!(found, Some(created));
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: InMemoryUserRepository) {
        let first = repo.create(&draft("Ann")).await.expect("create");
        assert!(repo.delete_by_id(first.id()).await.expect("delete"));
        let second = repo.create(&draft("Bob")).await.expect("create");
        assert_ne!(first.id(), second.id());
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_every_created_record(repo: InMemoryUserRepository) {
        let mut created = Vec::new();
        for name in ["Ann", "Bob", "Cid"] {
            created.push(repo.create(&draft(name)).await.expect("create"));
        }
        assert_eq!(repo.list().await.expect("list"), created);
    }

    #[rstest]
    #[tokio::test]
    async fn update_and_delete_report_missing_rows(repo: InMemoryUserRepository) {
        let missing = UserId::new(42);
        assert!(
            repo.update_by_id(missing, &draft("Ann"))
                .await
                .expect("update")
                .is_none()
        );
        assert!(!repo.delete_by_id(missing).await.expect("delete"));
    }
}
