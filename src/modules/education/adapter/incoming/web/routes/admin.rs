use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::education::application::domain::{Education, EducationDraft};
use crate::shared::api::{parse_resource_id, ApiResponse};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::PageQuery;
use crate::AppState;

use super::dto::EducationRequest;

/// List education (admin)
#[utoipa::path(
    get,
    path = "/api/admin/education",
    tag = "education",
    security(("BearerAuth" = [])),
    params(
        ("page" = Option<String>, Query, description = "Page number, defaults to 1"),
        ("limit" = Option<String>, Query, description = "Page size, defaults to 10, capped at 100"),
    ),
    responses(
        (status = 200, description = "Education entries", body = inline(SuccessResponse<PageResult<Education>>)),
        (status = 401, description = "Not authorized", body = ErrorResponse),
    )
)]
#[get("/api/admin/education")]
pub async fn list_education_admin_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state.education.list(false, query.pagination()).await?;
    Ok(ApiResponse::success(page))
}

/// Get education (admin)
#[utoipa::path(
    get,
    path = "/api/admin/education/{id}",
    tag = "education",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Education id")),
    responses(
        (status = 200, description = "Education entry", body = inline(SuccessResponse<Education>)),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[get("/api/admin/education/{id}")]
pub async fn get_education_admin_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let education = state.education.get_by_id(id, false).await?;
    Ok(ApiResponse::success(education))
}

/// Create education
#[utoipa::path(
    post,
    path = "/api/admin/education",
    tag = "education",
    security(("BearerAuth" = [])),
    request_body = EducationRequest,
    responses(
        (status = 201, description = "Education created", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/education")]
pub async fn create_education_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    payload: web::Json<EducationRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = EducationDraft::try_from(payload.into_inner())?;
    let education = state.education.create(draft).await?;
    Ok(ApiResponse::created(education))
}

/// Replace education
#[utoipa::path(
    put,
    path = "/api/admin/education/{id}",
    tag = "education",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Education id")),
    request_body = EducationRequest,
    responses(
        (status = 200, description = "Education replaced", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[put("/api/admin/education/{id}")]
pub async fn replace_education_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<EducationRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let draft = EducationDraft::try_from(payload.into_inner())?;
    let education = state.education.replace(id, draft).await?;
    Ok(ApiResponse::success(education))
}

/// Deactivate education
#[utoipa::path(
    delete,
    path = "/api/admin/education/{id}",
    tag = "education",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Education id")),
    responses(
        (status = 200, description = "Education deactivated", body = MessageResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[delete("/api/admin/education/{id}")]
pub async fn deactivate_education_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    state.education.deactivate(id).await?;
    Ok(ApiResponse::message("Education deleted successfully"))
}
