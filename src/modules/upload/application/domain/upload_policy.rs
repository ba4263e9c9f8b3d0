use std::path::PathBuf;

use uuid::Uuid;

use crate::shared::validation::{generate_slug, is_valid_file_type};

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub allowed_extensions: &'static [&'static str],
    pub upload_dir: PathBuf,
}

impl UploadPolicy {
    pub const DEFAULT_UPLOAD_DIR: &'static str = "uploads";
    pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["jpg", "jpeg", "png", "webp", "pdf"];

    /// `upload_dir` from `UPLOAD_DIR`, fallback to "uploads".
    pub fn from_env() -> Self {
        let upload_dir = std::env::var("UPLOAD_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_UPLOAD_DIR.to_string());

        Self::new(upload_dir)
    }

    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
            upload_dir: upload_dir.into(),
        }
    }

    pub fn is_allowed(&self, filename: &str) -> bool {
        is_valid_file_type(filename, self.allowed_extensions)
    }

    /// `<uuid>-<slugged stem>.<lowercase ext>`, or `None` for a disallowed type.
    pub fn stored_name(&self, original: &str) -> Option<String> {
        if !self.is_allowed(original) {
            return None;
        }

        let (stem, ext) = original.rsplit_once('.')?;
        let slug = generate_slug(stem);
        let ext = ext.to_ascii_lowercase();

        Some(if slug.is_empty() {
            format!("{}.{ext}", Uuid::new_v4())
        } else {
            format!("{}-{slug}.{ext}", Uuid::new_v4())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_name_is_prefixed_and_slugged() {
        let policy = UploadPolicy::new("uploads");

        let name = policy.stored_name("My Photo_2024.PNG").unwrap();

        assert!(name.ends_with("-my-photo-2024.png"), "{name}");
        assert!(uuid::Uuid::parse_str(&name[..36]).is_ok());
    }

    #[test]
    fn disallowed_types_have_no_stored_name() {
        let policy = UploadPolicy::new("uploads");

        assert!(policy.stored_name("malware.exe").is_none());
        assert!(policy.stored_name(".png").is_none());
        assert!(policy.stored_name("noextension").is_none());
    }

    #[test]
    fn stem_without_slug_characters_keeps_only_uuid() {
        let policy = UploadPolicy::new("uploads");

        let name = policy.stored_name("###.pdf").unwrap();
        assert_eq!(name.len(), 36 + ".pdf".len());
    }

    #[test]
    fn defaults() {
        let policy = UploadPolicy::new("/tmp/x");
        assert_eq!(policy.max_file_size_bytes, 5 * 1024 * 1024);
        assert!(policy.is_allowed("cv.pdf"));
        assert!(policy.is_allowed("photo.WEBP"));
        assert!(!policy.is_allowed("photo.gif"));
    }
}
