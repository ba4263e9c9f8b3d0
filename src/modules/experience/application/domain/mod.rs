pub mod entities;

pub use entities::{Experience, ExperienceData, ExperienceDraft, ExperienceFilter};
