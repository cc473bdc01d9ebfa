//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed user entity, the transport-agnostic
//! error type, and the ports that inbound and outbound adapters plug into.
//!
//! Public surface:
//! - `DomainError` / `ErrorCode`: error payload shared by adapters.
//! - `User`, `UserDraft`, `UserId`, `PersonName`: the user entity and its parts.
//! - `TraceId`: request-scoped correlation identifier.
//! - `UserService`: implementation of the user driving ports.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{DomainError, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    NAME_MAX, PersonName, User, UserDraft, UserField, UserId, UserValidationError,
    parse_birthday,
};
pub use self::user_service::UserService;
