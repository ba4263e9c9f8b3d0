pub mod serve_file;
pub mod upload_file;

pub use serve_file::serve_file_handler;
pub use upload_file::upload_file_handler;
