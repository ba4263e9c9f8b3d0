use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::education::application::domain::EducationDraft;
use crate::shared::validation::{JsonFields, NumericInput, ValidationErrors};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRequest {
    #[schema(value_type = Option<String>, example = "BSc Computer Science")]
    pub degree: Option<Value>,

    #[schema(value_type = Option<String>, example = "University of Somewhere")]
    pub institution: Option<Value>,

    #[schema(value_type = Option<String>, example = "2014 - 2018")]
    pub duration: Option<Value>,

    #[schema(value_type = Option<String>, example = "Berlin")]
    pub location: Option<Value>,

    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,

    #[schema(value_type = Option<i64>, example = 0)]
    pub order: Option<Value>,

    #[schema(value_type = Option<bool>)]
    pub is_active: Option<Value>,
}

impl TryFrom<EducationRequest> for EducationDraft {
    type Error = ValidationErrors;

    fn try_from(req: EducationRequest) -> Result<Self, Self::Error> {
        let mut fields = JsonFields::new();
        let draft = EducationDraft {
            degree: fields.text("Degree", req.degree),
            institution: fields.text("Institution", req.institution),
            duration: fields.text("Duration", req.duration),
            location: fields.text("Location", req.location),
            description: fields.text("Description", req.description),
            order: NumericInput::from_json(req.order.as_ref()),
            is_active: fields.flag("isActive", req.is_active),
        };
        fields.finish(draft)
    }
}
