use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::contact::application::domain::ContactDraft;
use crate::shared::validation::{JsonFields, ValidationErrors};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    #[schema(value_type = Option<String>, example = "jane@example.com")]
    pub email: Option<Value>,

    #[schema(value_type = Option<String>, example = "+1 (555) 123-4567")]
    pub phone: Option<Value>,

    #[schema(value_type = Option<String>, example = "https://linkedin.com/in/janedoe")]
    pub linkedin: Option<Value>,

    #[schema(value_type = Option<String>, example = "https://github.com/janedoe")]
    pub github: Option<Value>,

    #[schema(value_type = Option<String>, example = "Berlin, Germany")]
    pub location: Option<Value>,

    #[schema(value_type = Option<bool>)]
    pub is_active: Option<Value>,
}

impl TryFrom<ContactRequest> for ContactDraft {
    type Error = ValidationErrors;

    fn try_from(req: ContactRequest) -> Result<Self, Self::Error> {
        let mut fields = JsonFields::new();
        let draft = ContactDraft {
            email: fields.text("Email", req.email),
            phone: fields.text("Phone", req.phone),
            linkedin: fields.text("LinkedIn URL", req.linkedin),
            github: fields.text("GitHub URL", req.github),
            location: fields.text("Location", req.location),
            is_active: fields.flag("isActive", req.is_active),
        };
        fields.finish(draft)
    }
}
