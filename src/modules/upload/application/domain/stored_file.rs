use serde::Serialize;
use utoipa::ToSchema;

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StoredFile {
    #[schema(example = "/api/uploads/0b7e4f2c-5d1a-4c7e-9a51-8f3e2d1c0b9a-portrait.png")]
    pub url: String,
}

impl StoredFile {
    pub const PUBLIC_PREFIX: &'static str = "/api/uploads";

    pub fn from_name(name: &str) -> Self {
        Self {
            url: format!("{}/{name}", Self::PUBLIC_PREFIX),
        }
    }
}

/// Only names this service could have generated are ever served.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains("..")
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

pub fn content_type_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_names_are_unsafe() {
        assert!(!is_safe_file_name("../etc/passwd"));
        assert!(!is_safe_file_name("..%2Fsecret"));
        assert!(!is_safe_file_name("dir/file.png"));
        assert!(!is_safe_file_name(".env"));
        assert!(!is_safe_file_name(""));
        assert!(is_safe_file_name("3f2a-photo.png"));
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("cv.pdf"), "application/pdf");
        assert_eq!(content_type_for("blob"), "application/octet-stream");
    }

    #[test]
    fn url_points_at_public_route() {
        assert_eq!(StoredFile::from_name("x.png").url, "/api/uploads/x.png");
    }
}
