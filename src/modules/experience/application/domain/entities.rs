use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    messages, validate_document, Constraint, Document, FieldSpec, FieldValue, NumericInput,
    Pattern, ValidationErrors,
};

/// One position on the career timeline.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    #[schema(example = "Senior Backend Engineer")]
    pub title: String,
    #[schema(example = "Acme Corp")]
    pub company: String,
    #[schema(example = "https://acme.example.com")]
    pub website: String,
    #[schema(example = "2021 - Present")]
    pub duration: String,
    #[schema(example = "Remote")]
    pub location: String,
    pub description: String,
    /// Ascending display position.
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        constraints: &[Constraint::Required, Constraint::MaxLength(100)],
    },
    FieldSpec {
        name: "company",
        label: "Company",
        constraints: &[Constraint::Required, Constraint::MaxLength(100)],
    },
    FieldSpec {
        name: "website",
        label: "Website",
        constraints: &[Constraint::Required, Constraint::Pattern(Pattern::Url)],
    },
    FieldSpec {
        name: "duration",
        label: "Duration",
        constraints: &[Constraint::Required],
    },
    FieldSpec {
        name: "location",
        label: "Location",
        constraints: &[Constraint::Required],
    },
    FieldSpec {
        name: "description",
        label: "Description",
        constraints: &[Constraint::Required, Constraint::MaxLength(2000)],
    },
    FieldSpec {
        name: "order",
        label: "Order",
        constraints: &[Constraint::Min(0)],
    },
];

#[derive(Debug, Clone, Default)]
pub struct ExperienceDraft {
    pub title: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub order: NumericInput,
    pub is_active: Option<bool>,
}

impl Document for ExperienceDraft {
    fn fields() -> &'static [FieldSpec] {
        EXPERIENCE_FIELDS
    }

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "title" => FieldValue::Text(self.title.as_deref()),
            "company" => FieldValue::Text(self.company.as_deref()),
            "website" => FieldValue::Text(self.website.as_deref()),
            "duration" => FieldValue::Text(self.duration.as_deref()),
            "location" => FieldValue::Text(self.location.as_deref()),
            "description" => FieldValue::Text(self.description.as_deref()),
            "order" => FieldValue::Integer(self.order),
            _ => FieldValue::Text(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceData {
    pub title: String,
    pub company: String,
    pub website: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub order: i32,
    pub is_active: bool,
}

impl ExperienceDraft {
    pub fn validate(self) -> Result<ExperienceData, ValidationErrors> {
        validate_document(&self)?;

        let order = i32::try_from(self.order.value_or(0)).map_err(|_| {
            ValidationErrors::single(messages::out_of_range("Order", 0, i32::MAX as i64))
        })?;

        Ok(ExperienceData {
            title: self.title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            order,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Listing scope: public reads see active rows only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceFilter {
    pub active_only: bool,
    /// Case-insensitive match on company, title or description.
    pub search: Option<String>,
}

impl ExperienceFilter {
    pub fn public(search: Option<String>) -> Self {
        Self {
            active_only: true,
            search: normalize_search(search),
        }
    }

    pub fn admin(search: Option<String>) -> Self {
        Self {
            active_only: false,
            search: normalize_search(search),
        }
    }
}

fn normalize_search(search: Option<String>) -> Option<String> {
    search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
