//! Bearer-token authentication middleware
//!
//! This middleware guards protected route scopes. It pulls the credential
//! out of the `Authorization` header, verifies it against the signing
//! secret in [`AppState`], and stores the resulting [`CurrentUser`] in
//! request extensions for downstream handlers. Requests without a
//! credential are rejected with 401, requests with a bad one with 403.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::state::app_state::AppState;

pub struct TokenAuth;

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware { service }))
    }
}

pub struct TokenAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();

        let token = match credential_from_header(auth_header.as_ref()) {
            Some(token) => token,
            None => {
                return Box::pin(async { Err(AppError::missing_credential().into()) });
            }
        };

        // Signing secret comes in through AppState - must be available
        let app_state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available".to_string()).into())
                });
            }
        };

        match verify_access_token(&token, &app_state.security) {
            Ok(claims) => {
                // Store the identity in request extensions BEFORE calling
                // the downstream service; this is the only place a
                // CurrentUser is ever inserted.
                req.extensions_mut().insert(CurrentUser::from(claims));

                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(err) => {
                tracing::warn!(path = %req.path(), "token verification failed");
                Box::pin(async move { Err(err.into()) })
            }
        }
    }
}

/// Pull the credential out of an `Authorization` header value.
///
/// The value is split on whitespace and the second segment is taken as the
/// token. The scheme word is deliberately not inspected: the upstream
/// contract treats `Token <jwt>` the same as `Bearer <jwt>`, and a header
/// with no second segment (a bare `Bearer`, or any single word) the same as
/// no header at all.
fn credential_from_header(value: Option<&header::HeaderValue>) -> Option<String> {
    let value = value?.to_str().ok()?;
    value.split_whitespace().nth(1).map(str::to_owned)
}
