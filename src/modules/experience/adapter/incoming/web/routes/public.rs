use actix_web::{get, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::application::domain::{Experience, ExperienceFilter};
use crate::shared::api::{parse_resource_id, ApiResponse};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::AppState;

use super::dto::ExperienceListQuery;

/// Public experience timeline
///
/// Active entries only, ordered by position then newest first.
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experience",
    params(ExperienceListQuery),
    responses(
        (status = 200, description = "Experiences", body = inline(SuccessResponse<PageResult<Experience>>)),
    )
)]
#[get("/api/experiences")]
pub async fn list_experiences_handler(
    state: web::Data<AppState>,
    query: web::Query<ExperienceListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state
        .experience
        .list(ExperienceFilter::public(query.search()), query.pagination())
        .await?;

    Ok(ApiResponse::success(page))
}

/// Public experience entry
#[utoipa::path(
    get,
    path = "/api/experiences/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience", body = inline(SuccessResponse<Experience>)),
        (status = 404, description = "Unknown, inactive or malformed id", body = ErrorResponse),
    )
)]
#[get("/api/experiences/{id}")]
pub async fn get_experience_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let experience = state.experience.get_by_id(id, true).await?;
    Ok(ApiResponse::success(experience))
}
