mod common;

use std::time::SystemTime;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::{mint_access_token, routes, AppState, RequestTrace, SecurityConfig, TokenAuth};
use serde_json::Value;

use common::{
    assert_error_body, assert_error_body_from_http_response, call_and_render_rejection,
    MISSING_TOKEN_MESSAGE, TEST_SECRET,
};

/// The real route wiring: public routes plus the protected /api/v1 scope,
/// exactly as main.rs mounts them.
#[actix_web::test]
async fn users_me_echoes_the_token_subject() {
    let security = SecurityConfig::new(TEST_SECRET.as_bytes());
    let state = web::Data::new(AppState::new(security.clone()));

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(state.clone())
            .service(
                web::scope("/api/v1")
                    .wrap(TokenAuth)
                    .configure(routes::api_v1),
            )
            .configure(routes::configure),
    )
    .await;

    let token = mint_access_token("alice", SystemTime::now(), &security).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["sub"], "alice");
    assert!(body["iat"].is_i64());
    assert!(body["exp"].is_i64());
}

#[actix_web::test]
async fn users_me_requires_a_credential() {
    let state = web::Data::new(AppState::new(SecurityConfig::new(TEST_SECRET.as_bytes())));

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(state.clone())
            .service(
                web::scope("/api/v1")
                    .wrap(TokenAuth)
                    .configure(routes::api_v1),
            )
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/users/me").to_request();
    let resp = call_and_render_rejection(&app, req).await;

    assert_error_body_from_http_response(resp, StatusCode::UNAUTHORIZED, MISSING_TOKEN_MESSAGE)
        .await;
}

/// The extractor alone (no middleware mounted) behaves like a missing
/// credential: no identity in extensions means 401.
#[actix_web::test]
async fn current_user_extractor_without_middleware_is_401() {
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .service(web::scope("/api/v1").configure(routes::api_v1)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/users/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, StatusCode::UNAUTHORIZED, MISSING_TOKEN_MESSAGE).await;
}
