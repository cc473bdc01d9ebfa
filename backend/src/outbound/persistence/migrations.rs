//! Schema ensure step run once at startup.
//!
//! Migrations are embedded in the binary and applied through a blocking
//! wrapper around `AsyncPgConnection`, so callers must not already be inside
//! a Tokio runtime.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while ensuring the schema exists.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The database could not be reached.
    #[error("failed to connect to database: {0}")]
    Connect(#[from] diesel::ConnectionError),

    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Migrate {
        /// Migration harness message.
        message: String,
    },
}

/// Apply every pending migration and return how many were applied.
///
/// Already-applied migrations are skipped, so this is safe to run on every
/// start.
///
/// # Errors
///
/// Returns [`SchemaError::Connect`] when the database is unreachable and
/// [`SchemaError::Migrate`] when a migration fails.
pub fn ensure_schema(database_url: &str) -> Result<usize, SchemaError> {
    let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(database_url)?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaError::Migrate {
            message: err.to_string(),
        })?;

    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}
