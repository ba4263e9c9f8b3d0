use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::modules::contact_form::application::domain::{ContactFormDraft, ContactFormFilter};
use crate::shared::validation::{
    messages, validate_pagination, JsonFields, Pagination, ValidationErrors,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormRequest {
    #[schema(value_type = Option<String>, example = "Sam Smith")]
    pub name: Option<serde_json::Value>,

    #[schema(value_type = Option<String>, example = "sam@example.com")]
    pub email: Option<serde_json::Value>,

    #[schema(value_type = Option<String>, example = "+1 555 123 4567")]
    pub phone: Option<serde_json::Value>,

    #[schema(value_type = Option<String>, example = "Engineering Manager")]
    pub role: Option<serde_json::Value>,

    #[schema(value_type = Option<String>, example = "Initech")]
    pub company: Option<serde_json::Value>,

    #[schema(value_type = Option<String>, example = "We'd love to chat about a backend role.")]
    pub message: Option<serde_json::Value>,
}

impl TryFrom<ContactFormRequest> for ContactFormDraft {
    type Error = ValidationErrors;

    fn try_from(req: ContactFormRequest) -> Result<Self, Self::Error> {
        let mut fields = JsonFields::new();
        let draft = ContactFormDraft {
            name: fields.text("Name", req.name),
            email: fields.text("Email", req.email),
            phone: fields.text("Phone", req.phone),
            role: fields.text("Role", req.role),
            company: fields.text("Company", req.company),
            message: fields.text("Message", req.message),
        };
        fields.finish(draft)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ContactFormListQuery {
    /// Page number, defaults to 1
    pub page: Option<String>,
    /// Page size, defaults to 10, capped at 100
    pub limit: Option<String>,
    /// `true` or `false`; omitted means both
    pub is_read: Option<String>,
    /// `true` or `false`; omitted means both
    pub is_archived: Option<String>,
}

impl ContactFormListQuery {
    pub fn pagination(&self) -> Pagination {
        validate_pagination(self.page.as_deref(), self.limit.as_deref())
    }

    pub fn filter(&self) -> Result<ContactFormFilter, ValidationErrors> {
        Ok(ContactFormFilter {
            is_read: parse_flag(self.is_read.as_deref(), "isRead")?,
            is_archived: parse_flag(self.is_archived.as_deref(), "isArchived")?,
        })
    }
}

fn parse_flag(raw: Option<&str>, field: &str) -> Result<Option<bool>, ValidationErrors> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(v) if v.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(_) => Err(ValidationErrors::single(messages::not_a_boolean(field))),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadRequest {
    #[schema(value_type = bool, example = true)]
    pub is_read: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRequest {
    #[schema(value_type = bool, example = true)]
    pub is_archived: Option<serde_json::Value>,
}

/// Body flags must be real JSON booleans.
pub fn require_bool(
    value: Option<&serde_json::Value>,
    field: &str,
) -> Result<bool, ValidationErrors> {
    match value {
        None | Some(serde_json::Value::Null) => {
            Err(ValidationErrors::single(messages::required(field)))
        }
        Some(serde_json::Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ValidationErrors::single(messages::not_a_boolean(field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flags_parse_case_insensitively() {
        let query = ContactFormListQuery {
            is_read: Some("FALSE".into()),
            ..Default::default()
        };

        assert_eq!(
            query.filter().unwrap(),
            ContactFormFilter {
                is_read: Some(false),
                is_archived: None
            }
        );
    }

    #[test]
    fn bad_flag_is_rejected() {
        let query = ContactFormListQuery {
            is_archived: Some("yes".into()),
            ..Default::default()
        };

        let err = query.filter().unwrap_err();
        assert_eq!(err.messages(), ["isArchived must be true or false"]);
    }

    #[test]
    fn numeric_message_is_a_type_error() {
        let req: ContactFormRequest = serde_json::from_value(json!({
            "name": "Sam",
            "message": 42
        }))
        .unwrap();

        let err = ContactFormDraft::try_from(req).unwrap_err();
        assert_eq!(err.messages(), ["Message must be a string"]);
    }

    #[test]
    fn require_bool_rejects_strings() {
        assert!(require_bool(Some(&json!(true)), "isRead").unwrap());
        assert_eq!(
            require_bool(Some(&json!("true")), "isRead")
                .unwrap_err()
                .messages(),
            ["isRead must be true or false"]
        );
        assert_eq!(
            require_bool(None, "isRead").unwrap_err().messages(),
            ["isRead is required"]
        );
    }
}
