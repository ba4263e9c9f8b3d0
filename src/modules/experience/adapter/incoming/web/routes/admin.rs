use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::application::domain::{
    Experience, ExperienceDraft, ExperienceFilter,
};
use crate::shared::api::{parse_resource_id, ApiResponse};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::AppState;

use super::dto::{ExperienceListQuery, ExperienceRequest};

/// List experiences (admin)
///
/// Includes deactivated entries.
#[utoipa::path(
    get,
    path = "/api/admin/experiences",
    tag = "experience",
    security(("BearerAuth" = [])),
    params(ExperienceListQuery),
    responses(
        (status = 200, description = "Experiences", body = inline(SuccessResponse<PageResult<Experience>>)),
        (status = 401, description = "Not authorized", body = ErrorResponse),
    )
)]
#[get("/api/admin/experiences")]
pub async fn list_experiences_admin_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    query: web::Query<ExperienceListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state
        .experience
        .list(ExperienceFilter::admin(query.search()), query.pagination())
        .await?;

    Ok(ApiResponse::success(page))
}

/// Get experience (admin)
#[utoipa::path(
    get,
    path = "/api/admin/experiences/{id}",
    tag = "experience",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience", body = inline(SuccessResponse<Experience>)),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[get("/api/admin/experiences/{id}")]
pub async fn get_experience_admin_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let experience = state.experience.get_by_id(id, false).await?;
    Ok(ApiResponse::success(experience))
}

/// Create experience
#[utoipa::path(
    post,
    path = "/api/admin/experiences",
    tag = "experience",
    security(("BearerAuth" = [])),
    request_body = ExperienceRequest,
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
    )
)]
#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    payload: web::Json<ExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = ExperienceDraft::try_from(payload.into_inner())?;
    let experience = state.experience.create(draft).await?;
    Ok(ApiResponse::created(experience))
}

/// Replace experience
#[utoipa::path(
    put,
    path = "/api/admin/experiences/{id}",
    tag = "experience",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Experience id")),
    request_body = ExperienceRequest,
    responses(
        (status = 200, description = "Experience replaced", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[put("/api/admin/experiences/{id}")]
pub async fn replace_experience_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let draft = ExperienceDraft::try_from(payload.into_inner())?;
    let experience = state.experience.replace(id, draft).await?;
    Ok(ApiResponse::success(experience))
}

/// Deactivate experience
#[utoipa::path(
    delete,
    path = "/api/admin/experiences/{id}",
    tag = "experience",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience deactivated", body = MessageResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[delete("/api/admin/experiences/{id}")]
pub async fn deactivate_experience_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    state.experience.deactivate(id).await?;
    Ok(ApiResponse::message("Experience deleted successfully"))
}
