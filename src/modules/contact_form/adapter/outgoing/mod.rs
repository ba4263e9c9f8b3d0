mod contact_form_repository_postgres;
pub mod sea_orm_entity;

pub use contact_form_repository_postgres::ContactFormRepositoryPostgres;
