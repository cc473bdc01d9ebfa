//! User data model.
//!
//! A [`UserDraft`] carries the three client-supplied fields after validation;
//! a [`User`] is a draft the store has accepted, with its assigned id and
//! timestamps.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Maximum length accepted for a first or last name (the column width).
pub const NAME_MAX: usize = 255;

/// Client-supplied user fields, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    /// `firstName`
    FirstName,
    /// `lastName`
    LastName,
    /// `birthday`
    Birthday,
}

impl UserField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Birthday => "birthday",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors raised while building a [`UserDraft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// A required field was absent from the request.
    #[error("{field} is required")]
    Missing {
        /// Absent field.
        field: UserField,
    },
    /// A name was empty once trimmed.
    #[error("{field} must not be blank")]
    Blank {
        /// Blank field.
        field: UserField,
    },
    /// A name exceeded [`NAME_MAX`] characters.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Overlong field.
        field: UserField,
        /// Maximum accepted length in characters.
        max: usize,
    },
    /// The birthday was neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("birthday must be a date in YYYY-MM-DD form")]
    InvalidBirthday,
}

impl UserValidationError {
    /// Field the failure refers to.
    #[must_use]
    pub const fn field(&self) -> UserField {
        match self {
            Self::Missing { field } | Self::Blank { field } | Self::TooLong { field, .. } => {
                *field
            }
            Self::InvalidBirthday => UserField::Birthday,
        }
    }

    /// Stable machine-readable reason code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing_field",
            Self::Blank { .. } => "blank_field",
            Self::TooLong { .. } => "too_long",
            Self::InvalidBirthday => "invalid_date",
        }
    }
}

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse a path segment. Anything that is not a 32-bit integer cannot
    /// name a stored row, so it yields `None`.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::UserId;
    ///
    /// assert_eq!(UserId::parse("42"), Some(UserId::new(42)));
    /// assert_eq!(UserId::parse("abc"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i32>().ok().map(Self)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank personal name of at most [`NAME_MAX`] characters.
///
/// Serialise-only; build values with [`PersonName::new`] so validation
/// failures name the right field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Validate a name destined for `field`.
    pub fn new(field: UserField, value: impl Into<String>) -> Result<Self, UserValidationError> {
        let name: String = value.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::Blank { field });
        }
        if name.chars().count() > NAME_MAX {
            return Err(UserValidationError::TooLong {
                field,
                max: NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a birthday supplied as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// Timestamps keep only their UTC calendar date.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use user_service::domain::parse_birthday;
///
/// let expected = NaiveDate::from_ymd_opt(1990, 1, 1);
/// assert_eq!(parse_birthday("1990-01-01").ok(), expected);
/// assert_eq!(parse_birthday("1990-01-01T00:00:00.000Z").ok(), expected);
/// ```
pub fn parse_birthday(raw: &str) -> Result<NaiveDate, UserValidationError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            DateTime::parse_from_rfc3339(trimmed)
                .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        })
        .map_err(|_| UserValidationError::InvalidBirthday)
}

/// Validated user fields ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    first_name: PersonName,
    last_name: PersonName,
    birthday: NaiveDate,
}

impl UserDraft {
    /// Assemble a draft from validated parts.
    #[must_use]
    pub const fn new(first_name: PersonName, last_name: PersonName, birthday: NaiveDate) -> Self {
        Self {
            first_name,
            last_name,
            birthday,
        }
    }

    /// Validate raw, possibly absent, field values.
    ///
    /// Fields are checked in wire order and the first failure is reported.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::{UserDraft, UserField};
    ///
    /// let err = UserDraft::try_from_optional(Some("Ann"), None, Some("1990-01-01"))
    ///     .expect_err("lastName is missing");
    /// assert_eq!(err.field(), UserField::LastName);
    /// ```
    pub fn try_from_optional(
        first_name: Option<&str>,
        last_name: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, UserValidationError> {
        let first = require(UserField::FirstName, first_name)
            .and_then(|value| PersonName::new(UserField::FirstName, value))?;
        let last = require(UserField::LastName, last_name)
            .and_then(|value| PersonName::new(UserField::LastName, value))?;
        let born = require(UserField::Birthday, birthday).and_then(parse_birthday)?;
        Ok(Self::new(first, last, born))
    }

    /// First name.
    #[must_use]
    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Birthday.
    #[must_use]
    pub const fn birthday(&self) -> NaiveDate {
        self.birthday
    }
}

fn require(field: UserField, value: Option<&str>) -> Result<&str, UserValidationError> {
    value.ok_or(UserValidationError::Missing { field })
}

/// Stored user record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `first_name` and `last_name` are non-blank.
/// - `updated_at` is never earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = i32, example = 1)]
    id: UserId,
    #[schema(value_type = String, example = "Ann")]
    first_name: PersonName,
    #[schema(value_type = String, example = "Lee")]
    last_name: PersonName,
    #[schema(value_type = String, format = Date, example = "1990-01-01")]
    birthday: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Combine a store-assigned id and timestamps with validated fields.
    #[must_use]
    pub fn new(
        id: UserId,
        draft: UserDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let UserDraft {
            first_name,
            last_name,
            birthday,
        } = draft;
        Self {
            id,
            first_name,
            last_name,
            birthday,
            created_at,
            updated_at,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// First name.
    #[must_use]
    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Birthday.
    #[must_use]
    pub const fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// Insertion timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the last write.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Copy of this record with its client-supplied fields replaced.
    #[must_use]
    pub fn with_draft(&self, draft: UserDraft, updated_at: DateTime<Utc>) -> Self {
        Self::new(self.id, draft, self.created_at, updated_at)
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
