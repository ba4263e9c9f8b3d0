pub mod admin;
pub mod dto;
pub mod public;

pub use admin::{
    create_experience_handler, deactivate_experience_handler, get_experience_admin_handler,
    list_experiences_admin_handler, replace_experience_handler,
};
pub use dto::{ExperienceListQuery, ExperienceRequest};
pub use public::{get_experience_handler, list_experiences_handler};
