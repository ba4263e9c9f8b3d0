pub mod hero_service;

pub use hero_service::HeroService;
