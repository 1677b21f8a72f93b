#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::dev::{Service, ServiceResponse};
use actix_web::HttpResponse;

pub use backend_test_support::error_body::{assert_error_body, assert_error_body_from_http_response};

// Logging is auto-installed for every test binary that pulls in common
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fixed message returned when no credential is presented (401).
pub const MISSING_TOKEN_MESSAGE: &str = "Access denied. No token provided.";

/// Fixed message returned when the credential fails verification (403).
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token.";

/// Secret used by tests that mint and verify their own tokens.
pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// Call a service expecting a middleware rejection, and render the error
/// the way the server boundary would. Middleware short-circuits surface as
/// service errors, not responses, so `test::call_service` cannot be used.
pub async fn call_and_render_rejection<S, R, B>(app: &S, req: R) -> HttpResponse
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let err = app
        .call(req)
        .await
        .err()
        .expect("expected the request to be rejected");
    err.error_response()
}
