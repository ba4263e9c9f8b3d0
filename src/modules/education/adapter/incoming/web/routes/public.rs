use actix_web::{get, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::education::application::domain::Education;
use crate::shared::api::{parse_resource_id, ApiResponse};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::PageQuery;
use crate::AppState;

/// Public education list
#[utoipa::path(
    get,
    path = "/api/education",
    tag = "education",
    params(
        ("page" = Option<String>, Query, description = "Page number, defaults to 1"),
        ("limit" = Option<String>, Query, description = "Page size, defaults to 10, capped at 100"),
    ),
    responses(
        (status = 200, description = "Education entries", body = inline(SuccessResponse<PageResult<Education>>)),
    )
)]
#[get("/api/education")]
pub async fn list_education_handler(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state.education.list(true, query.pagination()).await?;
    Ok(ApiResponse::success(page))
}

/// Public education entry
#[utoipa::path(
    get,
    path = "/api/education/{id}",
    tag = "education",
    params(("id" = String, Path, description = "Education id")),
    responses(
        (status = 200, description = "Education entry", body = inline(SuccessResponse<Education>)),
        (status = 404, description = "Unknown, inactive or malformed id", body = ErrorResponse),
    )
)]
#[get("/api/education/{id}")]
pub async fn get_education_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let education = state.education.get_by_id(id, true).await?;
    Ok(ApiResponse::success(education))
}
