use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// JSON body emitted for every error response.
///
/// The `{"message": ...}` shape is part of the wire contract consumed by the
/// frontend; the two authentication messages are fixed strings.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// No bearer credential was presented with the request.
    #[error("Access denied. No token provided.")]
    MissingCredential,
    /// A credential was presented but failed verification (bad signature,
    /// expired, or not decodable).
    #[error("Invalid or expired token.")]
    InvalidCredential,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCredential => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredential => StatusCode::FORBIDDEN,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body
    fn message(&self) -> String {
        self.to_string()
    }

    pub fn missing_credential() -> Self {
        Self::MissingCredential
    }

    pub fn invalid_credential() -> Self {
        Self::InvalidCredential
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorBody {
            message: self.message(),
        })
    }
}
