//! Users API handlers.
//!
//! ```text
//! GET    /users
//! POST   /users       {"firstName":"Ann","lastName":"Lee","birthday":"1990-01-01"}
//! GET    /users/{id}
//! PUT    /users/{id}  {"firstName":"Annie","lastName":"Lee","birthday":"1990-01-01"}
//! DELETE /users/{id}
//! ```
//!
//! Missing records answer 404 with `{"message":"User not found"}` rather than
//! the error envelope, so existing clients keep matching on that body.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{DomainError, User, UserDraft, UserId, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

const USER_NOT_FOUND: &str = "User not found";
const USER_DELETED: &str = "User deleted";

/// Request body for creating or replacing a user.
///
/// Fields are optional at the wire level so absent values surface as
/// field-level validation errors rather than opaque parse failures.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// Given name.
    #[schema(example = "Ann")]
    pub first_name: Option<String>,
    /// Family name.
    #[schema(example = "Lee")]
    pub last_name: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[schema(example = "1990-01-01")]
    pub birthday: Option<String>,
}

impl TryFrom<UserPayload> for UserDraft {
    type Error = UserValidationError;

    fn try_from(value: UserPayload) -> Result<Self, Self::Error> {
        Self::try_from_optional(
            value.first_name.as_deref(),
            value.last_name.as_deref(),
            value.birthday.as_deref(),
        )
    }
}

/// Plain status message body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Outcome of the request.
    #[schema(example = "User not found")]
    pub message: String,
}

fn message(status: StatusCode, text: &str) -> HttpResponse {
    HttpResponse::build(status).json(MessageResponse {
        message: text.to_owned(),
    })
}

fn not_found() -> HttpResponse {
    message(StatusCode::NOT_FOUND, USER_NOT_FOUND)
}

fn map_validation_error(err: &UserValidationError) -> DomainError {
    DomainError::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field().as_str(), "code": err.code() }))
}

fn parse_draft(payload: web::Json<UserPayload>) -> ApiResult<UserDraft> {
    UserDraft::try_from(payload.into_inner()).map_err(|err| map_validation_error(&err))
}

/// List every stored user, ordered by id.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = DomainError),
        (status = 503, description = "Database unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 500, description = "Internal server error", body = DomainError),
        (status = 503, description = "Database unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(payload)?;
    let user = state.users_command.create_user(draft).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = DomainError),
        (status = 503, description = "Database unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let Some(id) = UserId::parse(&path) else {
        return Ok(not_found());
    };
    let found = state.users.find_user(id).await?;
    Ok(found.map_or_else(not_found, |user| HttpResponse::Ok().json(user)))
}

/// Replace every field of a user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = DomainError),
        (status = 503, description = "Database unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let Some(id) = UserId::parse(&path) else {
        return Ok(not_found());
    };
    let draft = parse_draft(payload)?;
    let updated = state.users_command.update_user(id, draft).await?;
    Ok(updated.map_or_else(not_found, |user| HttpResponse::Ok().json(user)))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = DomainError),
        (status = 503, description = "Database unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let Some(id) = UserId::parse(&path) else {
        return Ok(not_found());
    };
    Ok(if state.users_command.delete_user(id).await? {
        message(StatusCode::OK, USER_DELETED)
    } else {
        not_found()
    })
}

/// Register every user route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
