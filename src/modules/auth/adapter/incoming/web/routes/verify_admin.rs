use actix_web::{get, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::AdminIdentity;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct VerifyResponse {
    admin: AdminIdentity,
}

/// Re-check a stored token
///
/// Lets the dashboard confirm its token on load.
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = inline(SuccessResponse<VerifyResponse>)),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/api/auth/verify")]
pub async fn verify_admin_handler(admin: AdminUser) -> HttpResponse {
    ApiResponse::success(VerifyResponse {
        admin: admin.identity,
    })
}
