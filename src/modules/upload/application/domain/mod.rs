pub mod stored_file;
pub mod upload_policy;

pub use stored_file::{content_type_for, is_safe_file_name, StoredFile};
pub use upload_policy::UploadPolicy;
