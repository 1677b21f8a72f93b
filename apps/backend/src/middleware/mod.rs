pub mod cors;
pub mod request_trace;
pub mod structured_logger;
pub mod token_auth;

pub use cors::cors_middleware;
pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use token_auth::TokenAuth;
