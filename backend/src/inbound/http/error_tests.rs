//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn assert_error_response(
    error: DomainError,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> DomainError {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id not valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");

    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[case(DomainError::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(DomainError::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(DomainError::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: DomainError, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = DomainError::internal("connection string leaked")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let redacted = assert_error_response(
        error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), "Internal server error");
    assert!(redacted.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn validation_errors_keep_their_details(expected_trace_id: String) {
    let error = DomainError::invalid_request("lastName is required")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"field": "lastName", "code": "missing_field"}));

    let payload = assert_error_response(
        error,
        StatusCode::BAD_REQUEST,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(payload.message(), "lastName is required");
    assert_eq!(
        payload.details(),
        Some(&json!({"field": "lastName", "code": "missing_field"}))
    );
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let payload =
        assert_error_response(DomainError::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE, None)
            .await;
    assert_eq!(payload.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
fn from_actix_error_is_redacted_internal_error() {
    let actix_err = actix_web::error::ErrorBadRequest("boom");
    let err: DomainError = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}

#[rstest]
#[case(JsonPayloadError::ContentType, "unsupported_media_type")]
#[case(JsonPayloadError::Overflow { limit: 8 }, "payload_too_large")]
#[actix_web::test]
async fn json_errors_become_invalid_requests(
    #[case] err: JsonPayloadError,
    #[case] reason: &str,
) {
    let req = actix_web::test::TestRequest::default().to_http_request();
    let response = json_error_handler(err, &req).error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload: DomainError = serde_json::from_slice(&bytes).expect("error envelope");
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.details(), Some(&json!({"code": reason})));
}
