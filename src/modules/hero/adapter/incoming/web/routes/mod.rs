pub mod admin;
pub mod dto;
pub mod public;

pub use admin::{
    create_hero_handler, deactivate_hero_handler, list_heroes_handler, replace_hero_handler,
};
pub use dto::HeroRequest;
pub use public::get_hero_handler;
