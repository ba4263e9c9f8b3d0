//! Request validation primitives.
//!
//! Everything in here is pure: validators answer yes/no, sanitizers return a
//! cleaned copy, and [`schema::validate_document`] turns a draft entity into a
//! list of human-readable violations before anything touches the database.

pub mod messages;
pub mod pagination;
pub mod sanitizers;
pub mod schema;
pub mod validators;

pub use pagination::{validate_pagination, PageQuery, Pagination};
pub use sanitizers::{generate_slug, is_valid_file_type, sanitize_input, sanitize_optional};
pub use schema::{
    validate_document, Constraint, Document, FieldSpec, FieldValue, JsonFields, NumericInput,
    Pattern, ValidationErrors,
};
pub use validators::{
    is_strong_password, is_valid_email, is_valid_github_url, is_valid_hex_color, is_valid_id,
    is_valid_linkedin_url, is_valid_phone, is_valid_url,
};
