//! Shared helpers for integration tests.
//!
//! Integration tests compile as separate crates, so small helpers live here
//! and are pulled in with `mod support;`.

pub mod pg_embed;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// Render a `postgres` error with the SQLSTATE and server message.
///
/// `postgres::Error`'s `Display` often collapses to a bare `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }
    summary
}

/// Drop and recreate `name` so each suite starts from an empty database.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\"; CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))
}

/// Returns true when `REQUIRE_TEST_CLUSTER` is set to a truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn require_test_cluster() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handle embedded cluster setup failures consistently.
///
/// Prints a skip marker and returns `None`, unless `REQUIRE_TEST_CLUSTER` is
/// truthy, in which case the failure panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if require_test_cluster() {
        panic!("Test cluster setup failed: {reason}");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
