use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::AdminIdentity;
use crate::modules::auth::application::use_cases::login_admin::LoginRequest;
use crate::shared::api::ApiResponse;
use crate::shared::errors::AppError;
use crate::AppState;

/// Login request from the admin dashboard
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "Secur3P@ss")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for the admin API
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    admin: AdminIdentity,
}

/// Admin login
///
/// Checks the configured admin account and returns an access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Missing or malformed fields", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse,
            example = json!({ "success": false, "error": "Invalid credentials" })),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = LoginRequest::new(&payload.email, &payload.password)?;

    let outcome = state.login_admin_use_case.execute(request).await?;

    Ok(ApiResponse::success(LoginResponse {
        token: outcome.token,
        admin: outcome.admin,
    }))
}
