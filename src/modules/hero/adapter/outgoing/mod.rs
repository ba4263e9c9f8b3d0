mod hero_repository_postgres;
pub mod sea_orm_entity;

pub use hero_repository_postgres::HeroRepositoryPostgres;
