use serde::Serialize;
use utoipa::ToSchema;

/// The authenticated administrator, as decoded from a verified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminIdentity {
    #[schema(example = "admin@example.com")]
    pub email: String,
}

impl AdminIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
