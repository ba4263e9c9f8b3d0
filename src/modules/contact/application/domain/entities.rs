use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    validate_document, Constraint, Document, FieldSpec, FieldValue, Pattern, ValidationErrors,
};

/// Public contact card.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "+1 (555) 123-4567")]
    pub phone: String,
    #[schema(example = "https://linkedin.com/in/janedoe")]
    pub linkedin: String,
    #[schema(example = "https://github.com/janedoe")]
    pub github: String,
    #[schema(example = "Berlin, Germany")]
    pub location: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "email",
        label: "Email",
        constraints: &[Constraint::Required, Constraint::Pattern(Pattern::Email)],
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        constraints: &[Constraint::Required, Constraint::Pattern(Pattern::Phone)],
    },
    FieldSpec {
        name: "linkedin",
        label: "LinkedIn URL",
        constraints: &[
            Constraint::Required,
            Constraint::Pattern(Pattern::LinkedinUrl),
        ],
    },
    FieldSpec {
        name: "github",
        label: "GitHub URL",
        constraints: &[Constraint::Required, Constraint::Pattern(Pattern::GithubUrl)],
    },
    FieldSpec {
        name: "location",
        label: "Location",
        constraints: &[Constraint::Required, Constraint::MaxLength(200)],
    },
];

#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}

impl Document for ContactDraft {
    fn fields() -> &'static [FieldSpec] {
        CONTACT_FIELDS
    }

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "email" => FieldValue::Text(self.email.as_deref()),
            "phone" => FieldValue::Text(self.phone.as_deref()),
            "linkedin" => FieldValue::Text(self.linkedin.as_deref()),
            "github" => FieldValue::Text(self.github.as_deref()),
            "location" => FieldValue::Text(self.location.as_deref()),
            _ => FieldValue::Text(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactData {
    /// Stored lowercased; uniqueness is case-insensitive.
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
    pub is_active: bool,
}

impl ContactDraft {
    pub fn validate(self) -> Result<ContactData, ValidationErrors> {
        validate_document(&self)?;

        Ok(ContactData {
            email: self.email.unwrap_or_default().to_lowercase(),
            phone: self.phone.unwrap_or_default(),
            linkedin: self.linkedin.unwrap_or_default(),
            github: self.github.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}
