//! Translation of pool and Diesel failures into `UserPersistenceError`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

/// Map pool errors to a connection failure, keeping the driver message.
pub(super) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

/// Map Diesel errors to persistence errors.
///
/// Only a closed connection is treated as the store being unavailable; every
/// other failure is a query error with a generic message.
pub(super) fn map_diesel_error(error: &DieselError) -> UserPersistenceError {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}
