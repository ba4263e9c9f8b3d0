use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::modules::experience::application::domain::ExperienceDraft;
use crate::shared::validation::{
    sanitize_input, validate_pagination, JsonFields, NumericInput, Pagination, ValidationErrors,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRequest {
    #[schema(value_type = Option<String>, example = "Senior Backend Engineer")]
    pub title: Option<Value>,

    #[schema(value_type = Option<String>, example = "Acme Corp")]
    pub company: Option<Value>,

    #[schema(value_type = Option<String>, example = "https://acme.example.com")]
    pub website: Option<Value>,

    #[schema(value_type = Option<String>, example = "2021 - Present")]
    pub duration: Option<Value>,

    #[schema(value_type = Option<String>, example = "Remote")]
    pub location: Option<Value>,

    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,

    /// Display position; number or numeric string, defaults to 0.
    #[schema(value_type = Option<i64>, example = 0)]
    pub order: Option<Value>,

    #[schema(value_type = Option<bool>)]
    pub is_active: Option<Value>,
}

impl TryFrom<ExperienceRequest> for ExperienceDraft {
    type Error = ValidationErrors;

    fn try_from(req: ExperienceRequest) -> Result<Self, Self::Error> {
        let mut fields = JsonFields::new();
        let draft = ExperienceDraft {
            title: fields.text("Title", req.title),
            company: fields.text("Company", req.company),
            website: fields.text("Website", req.website),
            duration: fields.text("Duration", req.duration),
            location: fields.text("Location", req.location),
            description: fields.text("Description", req.description),
            order: NumericInput::from_json(req.order.as_ref()),
            is_active: fields.flag("isActive", req.is_active),
        };
        fields.finish(draft)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExperienceListQuery {
    /// Page number, defaults to 1
    pub page: Option<String>,
    /// Page size, defaults to 10, capped at 100
    pub limit: Option<String>,
    /// Case-insensitive match on company, title or description
    pub search: Option<String>,
}

impl ExperienceListQuery {
    pub fn pagination(&self) -> Pagination {
        validate_pagination(self.page.as_deref(), self.limit.as_deref())
    }

    pub fn search(&self) -> Option<String> {
        self.search.as_deref().map(sanitize_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_string_order_is_accepted() {
        let req: ExperienceRequest =
            serde_json::from_value(serde_json::json!({ "order": "4" })).unwrap();

        assert_eq!(
            ExperienceDraft::try_from(req).unwrap().order,
            NumericInput::Value(4)
        );
    }

    #[test]
    fn object_title_and_string_flag_are_both_reported() {
        let req: ExperienceRequest = serde_json::from_value(serde_json::json!({
            "title": { "en": "Engineer" },
            "isActive": "true"
        }))
        .unwrap();

        assert_eq!(
            ExperienceDraft::try_from(req).unwrap_err().messages(),
            ["Title must be a string", "isActive must be true or false"]
        );
    }

    #[test]
    fn search_is_sanitized() {
        let query = ExperienceListQuery {
            search: Some(" <rust> ".into()),
            ..Default::default()
        };

        assert_eq!(query.search().as_deref(), Some("rust"));
    }
}
