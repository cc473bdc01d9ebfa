//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and the table definition stay private to this module,
//! and every database failure is mapped to `UserPersistenceError`.
//!
//! # Example
//!
//! ```ignore
//! use user_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/usersdb")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, SchemaError, ensure_schema};
pub use pool::{DbPool, PoolConfig, PoolError};
