pub mod contact_form_service;

pub use contact_form_service::ContactFormService;
