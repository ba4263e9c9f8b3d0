use actix_web::{
    error::{JsonPayloadError, PathError, PayloadError, QueryPayloadError},
    http::StatusCode,
};
use thiserror::Error;

use crate::shared::persistence::RepositoryError;
use crate::shared::validation::{messages, ValidationErrors};

/// Every failure a handler can surface. Rendering lives in the normalizer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed resource identifier: {0}")]
    MalformedId(String),

    #[error("Unique constraint violated: {0}")]
    DuplicateKey(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    /// `limit` is absent when the body stream reports overflow without one.
    #[error("Payload exceeds the size limit")]
    PayloadTooLarge { limit: Option<usize> },

    #[error("{message}")]
    Unclassified {
        status: Option<StatusCode>,
        message: String,
    },

    /// Detail is logged, never shown to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(resource: &str) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, messages::not_found(resource))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal(detail.into())
    }

    /// Repository failure for a named resource; a miss becomes "<resource> not found".
    pub fn from_repository(resource: &str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::not_found(resource),
            other => other.into(),
        }
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Unclassified {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::not_found("Resource"),
            RepositoryError::Duplicate(detail) => AppError::DuplicateKey(detail),
            RepositoryError::DatabaseError(detail) => AppError::Internal(detail),
        }
    }
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::Overflow => AppError::PayloadTooLarge { limit: None },
            other => AppError::bad_request(other.to_string()),
        }
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Overflow { limit }
            | JsonPayloadError::OverflowKnownLength { limit, .. } => AppError::PayloadTooLarge {
                limit: Some(limit),
            },
            JsonPayloadError::Payload(inner) => inner.into(),
            other => AppError::bad_request(other.to_string()),
        }
    }
}

impl From<PathError> for AppError {
    fn from(err: PathError) -> Self {
        AppError::MalformedId(err.to_string())
    }
}

impl From<QueryPayloadError> for AppError {
    fn from(err: QueryPayloadError) -> Self {
        AppError::bad_request(err.to_string())
    }
}
