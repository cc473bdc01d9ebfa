//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{PersonName, User, UserDraft, UserField, UserId, UserValidationError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a domain user.
///
/// Rows written outside the service may violate name invariants; those are
/// surfaced as query errors rather than silently repaired.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id = row.id;
    let invalid = |err: UserValidationError| {
        UserPersistenceError::query(format!("stored user {id} is invalid: {err}"))
    };
    let first_name = PersonName::new(UserField::FirstName, row.first_name).map_err(invalid)?;
    let last_name = PersonName::new(UserField::LastName, row.last_name).map_err(invalid)?;
    let draft = UserDraft::new(first_name, last_name, row.birthday);
    Ok(User::new(
        UserId::new(id),
        draft,
        row.created_at,
        row.updated_at,
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            first_name: draft.first_name().as_ref(),
            last_name: draft.last_name().as_ref(),
            birthday: draft.birthday(),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;

        row_to_user(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.as_i32())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(&err))?;

        row.map(row_to_user).transpose()
    }

    async fn update_by_id(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = UserUpdate {
            first_name: draft.first_name().as_ref(),
            last_name: draft.last_name().as_ref(),
            birthday: draft.birthday(),
            updated_at: Utc::now(),
        };

        let row: Option<UserRow> = diesel::update(users::table.find(id.as_i32()))
            .set(&changes)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(&err))?;

        row.map(row_to_user).transpose()
    }

    async fn delete_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(users::table.find(id.as_i32()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rstest::rstest;

    fn row(first_name: &str) -> UserRow {
        let at = Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        UserRow {
            id: 7,
            first_name: first_name.to_owned(),
            last_name: "Lee".to_owned(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
            created_at: at,
            updated_at: at,
        }
    }

    #[rstest]
    fn row_to_user_copies_every_column() {
        let user = row_to_user(row("Ann")).expect("valid row");

        assert_eq!(user.id(), UserId::new(7));
        assert_eq!(user.first_name().as_ref(), "Ann");
        assert_eq!(user.last_name().as_ref(), "Lee");
        assert_eq!(user.birthday().to_string(), "1990-01-01");
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[rstest]
    fn row_with_blank_name_is_a_query_error() {
        let err = row_to_user(row("  ")).expect_err("blank name rejected");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
