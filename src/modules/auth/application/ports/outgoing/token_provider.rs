use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::errors::AppError;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::TokenExpired => AppError::TokenExpired,
            TokenError::EncodingError(detail) => AppError::Internal(detail),
            other => AppError::InvalidToken(other.to_string()),
        }
    }
}

/// Structure for JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,        // Admin email
    pub exp: i64,           // Expiration timestamp
    pub iat: i64,           // Issued at
    pub nbf: i64,           // Not before
    pub iss: String,        // Issuer
    pub token_type: String, // Always "access" today
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, subject: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
