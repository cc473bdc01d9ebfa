//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel ORM
//! - **in_memory**: process-local repository for tests and local runs
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod in_memory;
pub mod persistence;
