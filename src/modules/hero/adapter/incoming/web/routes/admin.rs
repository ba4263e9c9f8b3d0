use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::hero::application::domain::{Hero, HeroDraft};
use crate::shared::api::{parse_resource_id, ApiResponse};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::PageQuery;
use crate::AppState;

use super::dto::HeroRequest;

/// List heroes
///
/// Every hero, active or not, most recently updated first.
#[utoipa::path(
    get,
    path = "/api/admin/hero",
    tag = "hero",
    security(("BearerAuth" = [])),
    params(
        ("page" = Option<String>, Query, description = "Page number, defaults to 1"),
        ("limit" = Option<String>, Query, description = "Page size, defaults to 10, capped at 100"),
    ),
    responses(
        (status = 200, description = "Heroes", body = inline(SuccessResponse<PageResult<Hero>>)),
        (status = 401, description = "Not authorized", body = ErrorResponse),
    )
)]
#[get("/api/admin/hero")]
pub async fn list_heroes_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state.hero.list(query.pagination()).await?;
    Ok(ApiResponse::success(page))
}

/// Create hero
#[utoipa::path(
    post,
    path = "/api/admin/hero",
    tag = "hero",
    security(("BearerAuth" = [])),
    request_body = HeroRequest,
    responses(
        (status = 201, description = "Hero created", body = inline(SuccessResponse<Hero>)),
        (status = 400, description = "Validation failed", body = ErrorResponse,
            example = json!({ "success": false, "error": "Name is required, Bio is required" })),
        (status = 401, description = "Not authorized", body = ErrorResponse),
    )
)]
#[post("/api/admin/hero")]
pub async fn create_hero_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    payload: web::Json<HeroRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = HeroDraft::try_from(payload.into_inner())?;
    let hero = state.hero.create(draft).await?;
    Ok(ApiResponse::created(hero))
}

/// Replace hero
///
/// Full replace: omitted optional fields are cleared.
#[utoipa::path(
    put,
    path = "/api/admin/hero/{id}",
    tag = "hero",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Hero id")),
    request_body = HeroRequest,
    responses(
        (status = 200, description = "Hero replaced", body = inline(SuccessResponse<Hero>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[put("/api/admin/hero/{id}")]
pub async fn replace_hero_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<HeroRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let draft = HeroDraft::try_from(payload.into_inner())?;
    let hero = state.hero.replace(id, draft).await?;
    Ok(ApiResponse::success(hero))
}

/// Deactivate hero
///
/// Soft delete; the row stays with `isActive = false`.
#[utoipa::path(
    delete,
    path = "/api/admin/hero/{id}",
    tag = "hero",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero deactivated", body = MessageResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[delete("/api/admin/hero/{id}")]
pub async fn deactivate_hero_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    state.hero.deactivate(id).await?;
    Ok(ApiResponse::message("Hero deleted successfully"))
}
