//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schemas they reference. The document is served by Swagger UI under
//! `/api-docs` and exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{DomainError, ErrorCode, User};
use crate::inbound::http::users::{MessageResponse, UserPayload};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Create, read, update and delete user records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserPayload, MessageResponse, DomainError, ErrorCode)),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's paths and schema fields.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/users")]
    #[case("/users/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("User", &["id", "firstName", "lastName", "birthday", "createdAt", "updatedAt"])]
    #[case("UserPayload", &["firstName", "lastName", "birthday"])]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("MessageResponse", &["message"])]
    fn schema_has_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }
}
