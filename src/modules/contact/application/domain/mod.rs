pub mod entities;

pub use entities::{Contact, ContactData, ContactDraft};
