//! Error-body assertions shared by unit and integration tests.
//!
//! The backend answers every rejection with a JSON body of the shape
//! `{"message": "..."}`. These helpers validate that contract without
//! depending on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Deserialize;

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    message: String,
}

/// Assert that a `ServiceResponse` (handler- or extractor-level rejection)
/// carries the expected status and the exact `{"message": ...}` JSON body.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_message: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(status, &headers, &body, expected_status, expected_message);
}

/// Assert on an `HttpResponse`, the form a middleware rejection takes after
/// rendering (`Error::error_response()`).
pub async fn assert_error_body_from_http_response(
    resp: HttpResponse,
    expected_status: StatusCode,
    expected_message: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::body::to_bytes(resp.into_body())
        .await
        .expect("error response body should be readable");

    assert_error_body_from_parts(status, &headers, &body, expected_status, expected_message);
}

fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status);

    // Content-Type may include parameters (e.g., charset)
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let parsed: ErrorBodyLike = serde_json::from_slice(body)
        .expect("error response body should be valid {\"message\": ...} JSON");

    assert_eq!(parsed.message, expected_message);
}
