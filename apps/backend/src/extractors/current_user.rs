use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use crate::auth::claims::Claims;
use crate::error::AppError;

/// The identity attached to a request by the authentication middleware.
///
/// Present in request extensions only when token verification strictly
/// succeeded; handlers recover it with this extractor. A handler asking for
/// a `CurrentUser` on a request that never passed verification gets the
/// missing-credential rejection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Subject identifier from the verified token
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            sub: claims.sub,
            iat: claims.iat,
            exp: claims.exp,
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Read the identity stored by the TokenAuth middleware; extensions
        // are per-request, so nothing leaks across requests.
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .ok_or_else(AppError::missing_credential),
        )
    }
}
