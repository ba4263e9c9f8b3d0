use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    validate_document, Constraint, Document, FieldSpec, FieldValue, NumericInput,
    ValidationErrors,
};

/// Landing-page introduction block.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "Backend Engineer")]
    pub title: String,
    pub bio: String,
    #[schema(example = 7)]
    pub years_experience: i32,
    pub cv_url: Option<String>,
    pub profile_image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const HERO_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Name",
        constraints: &[Constraint::Required, Constraint::MaxLength(100)],
    },
    FieldSpec {
        name: "title",
        label: "Title",
        constraints: &[Constraint::Required, Constraint::MaxLength(100)],
    },
    FieldSpec {
        name: "bio",
        label: "Bio",
        constraints: &[Constraint::Required, Constraint::MaxLength(1000)],
    },
    FieldSpec {
        name: "yearsExperience",
        label: "Years of experience",
        constraints: &[Constraint::Required, Constraint::Range { min: 0, max: 50 }],
    },
];

/// Unvalidated hero input, already sanitized.
#[derive(Debug, Clone, Default)]
pub struct HeroDraft {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub years_experience: NumericInput,
    pub cv_url: Option<String>,
    pub profile_image: Option<String>,
    pub is_active: Option<bool>,
}

impl Document for HeroDraft {
    fn fields() -> &'static [FieldSpec] {
        HERO_FIELDS
    }

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(self.name.as_deref()),
            "title" => FieldValue::Text(self.title.as_deref()),
            "bio" => FieldValue::Text(self.bio.as_deref()),
            "yearsExperience" => FieldValue::Integer(self.years_experience),
            _ => FieldValue::Text(None),
        }
    }
}

/// Hero fields that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub years_experience: i32,
    pub cv_url: Option<String>,
    pub profile_image: Option<String>,
    pub is_active: bool,
}

impl HeroDraft {
    pub fn validate(self) -> Result<HeroData, ValidationErrors> {
        validate_document(&self)?;

        Ok(HeroData {
            name: self.name.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            bio: self.bio.unwrap_or_default(),
            // Range-checked to 0..=50 above
            years_experience: self.years_experience.value_or(0) as i32,
            cv_url: self.cv_url,
            profile_image: self.profile_image,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}
