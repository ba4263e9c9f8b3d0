use async_trait::async_trait;

use crate::modules::upload::application::{
    domain::{content_type_for, is_safe_file_name, StoredFile, UploadPolicy},
    ports::{
        incoming::UploadUseCases,
        outgoing::{FileStorage, UploadError},
    },
};
use crate::shared::errors::AppError;

#[derive(Debug, Clone)]
pub struct UploadService<S>
where
    S: FileStorage + Send + Sync,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> UploadService<S>
where
    S: FileStorage + Send + Sync,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl<S> UploadUseCases for UploadService<S>
where
    S: FileStorage + Send + Sync,
{
    fn max_file_size(&self) -> usize {
        self.policy.max_file_size_bytes
    }

    fn check_file_type(&self, original_name: &str) -> Result<(), AppError> {
        if self.policy.is_allowed(original_name) {
            Ok(())
        } else {
            Err(UploadError::InvalidFileType.into())
        }
    }

    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, AppError> {
        if bytes.len() > self.policy.max_file_size_bytes {
            return Err(AppError::PayloadTooLarge {
                limit: Some(self.policy.max_file_size_bytes),
            });
        }

        let name = self
            .policy
            .stored_name(original_name)
            .ok_or(UploadError::InvalidFileType)?;

        self.storage.save(&name, bytes).await?;

        tracing::info!(file = %name, size = bytes.len(), "File uploaded");
        Ok(StoredFile::from_name(&name))
    }

    async fn open(&self, name: &str) -> Result<(Vec<u8>, &'static str), AppError> {
        if !is_safe_file_name(name) {
            tracing::warn!(file = %name, "Rejected unsafe file name");
            return Err(UploadError::NotFound.into());
        }

        let bytes = self.storage.read(name).await?;
        Ok((bytes, content_type_for(name)))
    }
}
