use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::hero::application::domain::HeroDraft;
use crate::shared::validation::{JsonFields, NumericInput, ValidationErrors};

/// Hero body for create and full replace.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroRequest {
    #[schema(value_type = Option<String>, example = "Jane Doe")]
    pub name: Option<Value>,

    #[schema(value_type = Option<String>, example = "Backend Engineer")]
    pub title: Option<Value>,

    #[schema(value_type = Option<String>, example = "I build reliable APIs.")]
    pub bio: Option<Value>,

    /// Accepts a number or a numeric string.
    #[schema(value_type = Option<i64>, example = 7)]
    pub years_experience: Option<Value>,

    #[schema(value_type = Option<String>, example = "/api/uploads/3f2a-cv.pdf")]
    pub cv_url: Option<Value>,

    #[schema(value_type = Option<String>)]
    pub profile_image: Option<Value>,

    #[schema(value_type = Option<bool>)]
    pub is_active: Option<Value>,
}

impl TryFrom<HeroRequest> for HeroDraft {
    type Error = ValidationErrors;

    fn try_from(req: HeroRequest) -> Result<Self, Self::Error> {
        let mut fields = JsonFields::new();
        let draft = HeroDraft {
            name: fields.text("Name", req.name),
            title: fields.text("Title", req.title),
            bio: fields.text("Bio", req.bio),
            years_experience: NumericInput::from_json(req.years_experience.as_ref()),
            cv_url: fields.text("CV URL", req.cv_url),
            profile_image: fields.text("Profile image", req.profile_image),
            is_active: fields.flag("isActive", req.is_active),
        };
        fields.finish(draft)
    }
}
