use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;

/// Return the identity of the caller, as recovered from the verified
/// access token by the authentication middleware.
async fn me(user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)));
}
