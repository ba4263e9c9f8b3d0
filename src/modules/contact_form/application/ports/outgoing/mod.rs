pub mod contact_form_repository;

pub use contact_form_repository::ContactFormRepository;
