pub mod auth;
pub mod contact;
pub mod contact_form;
pub mod education;
pub mod experience;
pub mod hero;
pub mod upload;
