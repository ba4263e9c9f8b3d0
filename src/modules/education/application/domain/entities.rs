use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{
    messages, validate_document, Constraint, Document, FieldSpec, FieldValue, NumericInput,
    ValidationErrors,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    #[schema(example = "University of Somewhere")]
    pub institution: String,
    #[schema(example = "2014 - 2018")]
    pub duration: String,
    pub location: String,
    pub description: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const EDUCATION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "degree",
        label: "Degree",
        constraints: &[Constraint::Required],
    },
    FieldSpec {
        name: "institution",
        label: "Institution",
        constraints: &[Constraint::Required],
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
        constraints: &[Constraint::MaxLength(1000)],
    },
    FieldSpec {
        name: "order",
        label: "Order",
        constraints: &[Constraint::Min(0)],
    },
];

#[derive(Debug, Clone, Default)]
pub struct EducationDraft {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub order: NumericInput,
    pub is_active: Option<bool>,
}

impl Document for EducationDraft {
    fn fields() -> &'static [FieldSpec] {
        EDUCATION_FIELDS
    }

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "degree" => FieldValue::Text(self.degree.as_deref()),
            "institution" => FieldValue::Text(self.institution.as_deref()),
            "duration" => FieldValue::Text(self.duration.as_deref()),
            "location" => FieldValue::Text(self.location.as_deref()),
            "description" => FieldValue::Text(self.description.as_deref()),
            "order" => FieldValue::Integer(self.order),
            _ => FieldValue::Text(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationData {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub location: String,
    pub description: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

impl EducationDraft {
    pub fn validate(self) -> Result<EducationData, ValidationErrors> {
        validate_document(&self)?;

        let order = i32::try_from(self.order.value_or(0)).map_err(|_| {
            ValidationErrors::single(messages::out_of_range("Order", 0, i32::MAX as i64))
        })?;

        Ok(EducationData {
            degree: self.degree.unwrap_or_default(),
            institution: self.institution.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            order,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}
