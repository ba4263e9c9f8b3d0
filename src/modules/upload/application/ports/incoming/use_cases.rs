use async_trait::async_trait;

use crate::modules::upload::application::domain::StoredFile;
use crate::shared::errors::AppError;

#[async_trait]
pub trait UploadUseCases: Send + Sync {
    /// Upper bound for a request body, in bytes.
    fn max_file_size(&self) -> usize;

    /// Rejects disallowed file types before anything is written.
    fn check_file_type(&self, original_name: &str) -> Result<(), AppError>;

    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, AppError>;

    /// File bytes and their content type.
    async fn open(&self, name: &str) -> Result<(Vec<u8>, &'static str), AppError>;
}
