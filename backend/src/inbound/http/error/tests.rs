//! Status codes and bodies produced for domain errors.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

async fn render(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("JSON error body");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::storage("disk full"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_follows_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(err.status_code(), status);
}

#[rstest]
#[actix_web::test]
async fn validation_errors_keep_details_and_trace() {
    let error = Error::invalid_request("All fields are required.")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "fields": ["price"] }));

    let (status, header, body) = render(&error).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "code": "invalid_request",
            "message": "All fields are required.",
            "traceId": TRACE_ID,
            "details": { "fields": ["price"] },
        })
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("pool poisoned at line 7")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "secret": "x" }));

    let (status, header, body) = render(&error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn storage_errors_keep_their_message() {
    let error = Error::storage("car repository connection failed: refused");

    let (status, _, body) = render(&error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "storage_error");
    assert_eq!(body["message"], "car repository connection failed: refused");
}

#[rstest]
#[actix_web::test]
async fn untraced_errors_have_no_trace_header() {
    let (status, header, body) = render(&Error::not_found("No cars found")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(header, None);
    assert_eq!(body, json!({ "code": "not_found", "message": "No cars found" }));
}

#[rstest]
#[case(ErrorCode::InvalidRequest, "bad", "bad")]
#[case(ErrorCode::NotFound, "gone", "gone")]
#[case(ErrorCode::StorageError, "query failed", "query failed")]
#[case(ErrorCode::InternalError, "boom", "Internal server error")]
fn client_view_only_rewrites_internal_errors(
    #[case] code: ErrorCode,
    #[case] message: &str,
    #[case] expected: &str,
) {
    let view = client_view(&Error::new(code, message).with_trace_id(TRACE_ID));
    assert_eq!(view.code(), code);
    assert_eq!(view.message(), expected);
    assert_eq!(view.trace_id(), Some(TRACE_ID));
}
