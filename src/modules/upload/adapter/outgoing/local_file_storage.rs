use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::modules::upload::application::ports::outgoing::{FileStorage, UploadError};

/// Stores uploads as plain files under one directory.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), UploadError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| UploadError::Io(e.to_string()))?;

        fs::write(self.root.join(name), bytes)
            .await
            .map_err(|e| UploadError::Io(e.to_string()))
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>, UploadError> {
        fs::read(self.root.join(name)).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => UploadError::NotFound,
            _ => UploadError::Io(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_creates_directory_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path().join("nested"));

        storage.save("a.pdf", b"%PDF-1.7").await.unwrap();

        assert_eq!(storage.read("a.pdf").await.unwrap(), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path());

        assert_eq!(
            storage.read("nope.png").await.unwrap_err(),
            UploadError::NotFound
        );
    }
}
