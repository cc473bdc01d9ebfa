//! User service library modules.
//!
//! A hexagonal layout: `domain` holds the user entity and ports, `inbound`
//! exposes them over HTTP and `outbound` implements storage.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
