use async_trait::async_trait;

use crate::shared::errors::AppError;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum UploadError {
    #[error("Invalid file type")]
    InvalidFileType,

    #[error("File not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Io(String),
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::InvalidFileType => AppError::bad_request(err.to_string()),
            UploadError::NotFound => AppError::not_found("File"),
            UploadError::Io(detail) => AppError::internal(detail),
        }
    }
}

/// Flat namespace of stored files keyed by their generated name.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), UploadError>;

    async fn read(&self, name: &str) -> Result<Vec<u8>, UploadError>;
}
