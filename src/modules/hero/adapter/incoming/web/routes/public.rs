use actix_web::{get, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::hero::application::domain::Hero;
use crate::shared::api::ApiResponse;
use crate::shared::errors::AppError;
use crate::AppState;

/// Public hero block
///
/// Returns the most recently updated active hero.
#[utoipa::path(
    get,
    path = "/api/hero",
    tag = "hero",
    responses(
        (status = 200, description = "Active hero", body = inline(SuccessResponse<Hero>)),
        (status = 404, description = "No active hero", body = ErrorResponse,
            example = json!({ "success": false, "error": "Hero not found" })),
    )
)]
#[get("/api/hero")]
pub async fn get_hero_handler(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let hero = state.hero.get_public().await?;
    Ok(ApiResponse::success(hero))
}
