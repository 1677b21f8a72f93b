use actix_web::web;

pub mod health;
pub mod users;

/// Configure public application routes.
///
/// In production, `main.rs` additionally mounts [`api_v1`] under an
/// `/api/v1` scope wrapped with the `TokenAuth` middleware; tests wire that
/// scope themselves so they can control the middleware stack.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));
}

/// Configure the protected `/api/v1` route tree. Callers are expected to
/// mount this behind the authentication middleware.
pub fn api_v1(cfg: &mut web::ServiceConfig) {
    // User routes: /api/v1/users/**
    cfg.service(web::scope("/users").configure(users::configure_routes));
}
