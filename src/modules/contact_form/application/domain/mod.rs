pub mod entities;

pub use entities::{ContactForm, ContactFormData, ContactFormDraft, ContactFormFilter};
