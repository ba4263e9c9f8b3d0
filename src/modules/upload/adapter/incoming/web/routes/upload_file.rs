use actix_web::{post, web, HttpResponse};
use futures::StreamExt;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::upload::application::domain::StoredFile;
use crate::shared::api::ApiResponse;
use crate::shared::errors::AppError;
use crate::shared::validation::sanitize_input;
use crate::AppState;

/// Upload a file
///
/// The request body is the raw file. Images (jpg, jpeg, png, webp) and pdf up to 5 MB.
#[utoipa::path(
    post,
    path = "/api/admin/uploads/{filename}",
    tag = "uploads",
    security(("BearerAuth" = [])),
    params(("filename" = String, Path, description = "Original file name, used for the extension and slug")),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "File stored", body = inline(SuccessResponse<StoredFile>)),
        (status = 400, description = "Invalid file type or file too large", body = ErrorResponse,
            example = json!({ "success": false, "error": "File size too large" })),
        (status = 401, description = "Not authorized", body = ErrorResponse),
    )
)]
#[post("/api/admin/uploads/{filename}")]
pub async fn upload_file_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    mut payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let filename = sanitize_input(&path);
    state.upload.check_file_type(&filename)?;

    let limit = state.upload.max_file_size();
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge { limit: Some(limit) });
        }
        body.extend_from_slice(&chunk);
    }

    let stored = state.upload.store(&filename, &body).await?;
    Ok(ApiResponse::created(stored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::modules::upload::adapter::outgoing::LocalFileStorage;
    use crate::modules::upload::application::domain::UploadPolicy;
    use crate::modules::upload::application::services::UploadService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};

    fn upload_service(dir: &std::path::Path, max: usize) -> UploadService<LocalFileStorage> {
        let mut policy = UploadPolicy::new(dir);
        policy.max_file_size_bytes = max;
        UploadService::new(LocalFileStorage::new(dir), policy)
    }

    #[actix_web::test]
    async fn stores_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let provider = test_token_provider();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_upload(upload_service(dir.path(), 1024))
                        .build(),
                )
                .app_data(web::Data::new(provider.clone()))
                .service(upload_file_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/uploads/Head%20Shot.PNG")
            .insert_header(admin_bearer(&provider))
            .set_payload(&b"\x89PNG\r\n"[..])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let url = body["data"]["url"].as_str().unwrap().to_string();
        assert!(url.starts_with("/api/uploads/"));
        assert!(url.ends_with("-head-shot.png"), "{url}");

        let name = url.trim_start_matches("/api/uploads/");
        assert_eq!(std::fs::read(dir.path().join(name)).unwrap(), b"\x89PNG\r\n");
    }

    #[actix_web::test]
    async fn oversized_body_is_file_size_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let provider = test_token_provider();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_upload(upload_service(dir.path(), 8))
                        .build(),
                )
                .app_data(web::Data::new(provider.clone()))
                .service(upload_file_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/uploads/big.png")
            .insert_header(admin_bearer(&provider))
            .set_payload(vec![0u8; 64])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "File size too large");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn disallowed_extension_is_invalid_file_type() {
        let dir = tempfile::tempdir().unwrap();
        let provider = test_token_provider();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_upload(upload_service(dir.path(), 1024))
                        .build(),
                )
                .app_data(web::Data::new(provider.clone()))
                .service(upload_file_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/uploads/malware.exe")
            .insert_header(admin_bearer(&provider))
            .set_payload(&b"MZ"[..])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid file type");
    }
}
