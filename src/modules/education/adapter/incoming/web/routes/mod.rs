pub mod admin;
pub mod dto;
pub mod public;

pub use admin::{
    create_education_handler, deactivate_education_handler, get_education_admin_handler,
    list_education_admin_handler, replace_education_handler,
};
pub use dto::EducationRequest;
pub use public::{get_education_handler, list_education_handler};
