mod app_error;
mod normalizer;

pub use app_error::AppError;
pub use normalizer::{normalize, ErrorEnvelope, NormalizedError};
