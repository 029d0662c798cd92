//! Error handling - renders failures in the response envelope.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use chirp_core::DomainError;
use chirp_shared::ErrorResponse;

/// Application-level error type that converts to the failure envelope.
#[derive(Debug)]
pub enum AppError {
    /// Client-side failure. Ownership violations land here as well.
    BadRequest { message: String, code: &'static str },
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            code: "VALIDATION_ERROR",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest { message, code } => write!(f, "Bad request ({}): {}", code, message),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest { message, code } => {
                ErrorResponse::bad_request(message.as_str()).with_error(*code)
            }
            AppError::NotFound(message) => {
                ErrorResponse::not_found(message.as_str()).with_error("NOT_FOUND")
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error().with_error("PERSISTENCE_ERROR")
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let code = err.code();
        match err {
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Persistence(msg) => AppError::Internal(msg),
            DomainError::InvalidReference(message)
            | DomainError::Validation(message)
            | DomainError::Forbidden(message)
            | DomainError::MediaUpload(message) => AppError::BadRequest { message, code },
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_is_a_bad_request_with_code() {
        let err = AppError::from(DomainError::Forbidden("Only the owner can modify this tweet".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, AppError::BadRequest { code: "FORBIDDEN", .. }));
    }

    #[test]
    fn test_persistence_is_internal() {
        let err = AppError::from(DomainError::Persistence("connection reset".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
