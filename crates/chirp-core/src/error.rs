//! Domain-level error types.

use thiserror::Error;

use crate::ports::MediaError;

/// Domain errors - every failure a Chirp operation can surface.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Media upload failed: {0}")]
    MediaUpload(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidReference(_) => "INVALID_REFERENCE",
            DomainError::Validation(_) => "VALIDATION_ERROR",
            DomainError::Forbidden(_) => "FORBIDDEN",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::MediaUpload(_) => "MEDIA_UPLOAD_ERROR",
            DomainError::Persistence(_) => "PERSISTENCE_ERROR",
        }
    }

    pub(crate) fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        DomainError::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Stored record is malformed: {0}")]
    Corrupt(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Persistence(err.to_string())
    }
}

impl From<MediaError> for DomainError {
    fn from(err: MediaError) -> Self {
        DomainError::MediaUpload(err.to_string())
    }
}
