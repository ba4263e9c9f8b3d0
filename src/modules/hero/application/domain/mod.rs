pub mod entities;

pub use entities::{Hero, HeroData, HeroDraft};
