use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::api::ApiMessage;
use log::error;
use thiserror::Error;

/// Everything a resource handler can fail with.
///
/// Client mistakes carry their own message back in an `ApiMessage` body. Server-side
/// failures are logged in full and answered with a generic message.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid secret code")]
    Unauthorized,

    #[error("Admin secret code is not configured")]
    SecretNotConfigured,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("Document exceeds the {0} byte limit")]
    DocumentTooLarge(usize),

    #[error("Resource not found")]
    NotFound,

    #[error("Malformed multipart payload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::SecretNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::MissingField(_)
            | ServiceError::BadRequest(_)
            | ServiceError::Multipart(_) => StatusCode::BAD_REQUEST,
            ServiceError::DocumentTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Database(_) | ServiceError::Storage(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(ApiMessage::new(message))
    }
}
