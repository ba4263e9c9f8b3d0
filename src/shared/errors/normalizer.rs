use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{error, warn};

use super::AppError;
use crate::config::RuntimeMode;

pub const SERVER_ERROR: &str = "Server Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedError {
    pub status: StatusCode,
    pub message: String,
}

impl NormalizedError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Classifies a failure into its client-facing status and message.
///
/// Total: every variant resolves to exactly one branch, with `Unclassified`
/// as the catch-all.
pub fn normalize(err: &AppError) -> NormalizedError {
    match err {
        AppError::MalformedId(_) => NormalizedError::new(StatusCode::NOT_FOUND, "Resource not found"),
        AppError::DuplicateKey(_) => {
            NormalizedError::new(StatusCode::BAD_REQUEST, "Duplicate field value entered")
        }
        AppError::Validation(violations) => {
            NormalizedError::new(StatusCode::BAD_REQUEST, violations.to_string())
        }
        AppError::InvalidToken(_) => NormalizedError::new(StatusCode::UNAUTHORIZED, "Invalid token"),
        AppError::TokenExpired => NormalizedError::new(StatusCode::UNAUTHORIZED, "Token expired"),
        AppError::PayloadTooLarge { .. } => {
            NormalizedError::new(StatusCode::BAD_REQUEST, "File size too large")
        }
        AppError::Unclassified { status, message } => {
            let message = if message.trim().is_empty() {
                SERVER_ERROR.to_string()
            } else {
                message.clone()
            };
            NormalizedError::new(status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR), message)
        }
        AppError::Internal(_) => NormalizedError::new(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR),
    }
}

/// Wire shape of every failed response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorEnvelope {
    pub fn from_error(err: &AppError, mode: RuntimeMode) -> (StatusCode, Self) {
        let normalized = normalize(err);
        let stack = (!mode.is_production()).then(|| format!("{err:?}"));

        (
            normalized.status,
            Self {
                success: false,
                error: normalized.message,
                stack,
            },
        )
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        normalize(self).status
    }

    fn error_response(&self) -> HttpResponse {
        let (status, envelope) = ErrorEnvelope::from_error(self, RuntimeMode::current());

        if status.is_server_error() {
            error!(status = status.as_u16(), error = ?self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        HttpResponse::build(status).json(envelope)
    }
}
