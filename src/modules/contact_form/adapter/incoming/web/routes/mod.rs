pub mod admin;
pub mod dto;
pub mod public;

pub use admin::{
    archive_contact_form_handler, get_contact_form_handler, list_contact_forms_handler,
    mark_contact_form_read_handler,
};
pub use dto::{ArchiveRequest, ContactFormListQuery, ContactFormRequest, ReadRequest};
pub use public::submit_contact_form_handler;
