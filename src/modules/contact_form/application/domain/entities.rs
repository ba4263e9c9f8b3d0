use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    validate_document, Constraint, Document, FieldSpec, FieldValue, Pattern, ValidationErrors,
};

/// A visitor's message from the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub id: Uuid,
    #[schema(example = "Sam Smith")]
    pub name: String,
    #[schema(example = "sam@example.com")]
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Engineering Manager")]
    pub role: String,
    #[schema(example = "Initech")]
    pub company: String,
    pub message: String,
    pub is_read: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const CONTACT_FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Name",
        constraints: &[Constraint::Required, Constraint::MaxLength(100)],
    },
    FieldSpec {
        name: "email",
        label: "Email",
        constraints: &[Constraint::Required, Constraint::Pattern(Pattern::Email)],
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        constraints: &[Constraint::Pattern(Pattern::Phone)],
    },
    FieldSpec {
        name: "role",
        label: "Role",
        constraints: &[Constraint::Required, Constraint::MaxLength(100)],
    },
    FieldSpec {
        name: "company",
        label: "Company",
        constraints: &[Constraint::Required, Constraint::MaxLength(100)],
    },
    FieldSpec {
        name: "message",
        label: "Message",
        constraints: &[Constraint::Required, Constraint::MaxLength(2000)],
    },
];

#[derive(Debug, Clone, Default)]
pub struct ContactFormDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl Document for ContactFormDraft {
    fn fields() -> &'static [FieldSpec] {
        CONTACT_FORM_FIELDS
    }

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(self.name.as_deref()),
            "email" => FieldValue::Text(self.email.as_deref()),
            "phone" => FieldValue::Text(self.phone.as_deref()),
            "role" => FieldValue::Text(self.role.as_deref()),
            "company" => FieldValue::Text(self.company.as_deref()),
            "message" => FieldValue::Text(self.message.as_deref()),
            _ => FieldValue::Text(None),
        }
    }
}

/// Submission that passed validation; always stored unread and unarchived.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub company: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn validate(self) -> Result<ContactFormData, ValidationErrors> {
        validate_document(&self)?;

        Ok(ContactFormData {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default().to_lowercase(),
            phone: self.phone.filter(|p| !p.trim().is_empty()),
            role: self.role.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}

/// Inbox filter; `None` means either value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFormFilter {
    pub is_read: Option<bool>,
    pub is_archived: Option<bool>,
}
