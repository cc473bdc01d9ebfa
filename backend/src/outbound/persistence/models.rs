//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain types.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records; the store fills in `id`
/// and both timestamps.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birthday: NaiveDate,
}

/// Changeset replacing every client-supplied column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birthday: NaiveDate,
    pub updated_at: DateTime<Utc>,
}
