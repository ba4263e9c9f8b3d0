pub mod admin;
pub mod dto;
pub mod public;

pub use admin::{
    create_contact_handler, deactivate_contact_handler, get_contact_admin_handler,
    list_contacts_handler, replace_contact_handler,
};
pub use dto::ContactRequest;
pub use public::get_contact_handler;
