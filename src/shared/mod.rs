pub mod api;
pub mod errors;
pub mod persistence;
pub mod validation;
