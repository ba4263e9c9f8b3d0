use actix_web::{get, web, HttpResponse};

use crate::api::schemas::ErrorResponse;
use crate::shared::errors::AppError;
use crate::AppState;

/// Serve an uploaded file
#[utoipa::path(
    get,
    path = "/api/uploads/{filename}",
    tag = "uploads",
    params(("filename" = String, Path, description = "Stored file name")),
    responses(
        (status = 200, description = "File contents"),
        (status = 404, description = "Unknown or unsafe file name", body = ErrorResponse,
            example = json!({ "success": false, "error": "File not found" })),
    )
)]
#[get("/api/uploads/{filename}")]
pub async fn serve_file_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let (bytes, content_type) = state.upload.open(&path).await?;

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(("Cache-Control", "public, max-age=86400"))
        .body(bytes))
}
