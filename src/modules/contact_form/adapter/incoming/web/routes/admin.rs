use actix_web::{get, patch, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact_form::application::domain::ContactForm;
use crate::shared::api::{parse_resource_id, ApiResponse};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::AppState;

use super::dto::{require_bool, ArchiveRequest, ContactFormListQuery, ReadRequest};

/// Contact form inbox
///
/// Newest first, optionally filtered by read and archive state.
#[utoipa::path(
    get,
    path = "/api/admin/contact-forms",
    tag = "contact-forms",
    security(("BearerAuth" = [])),
    params(ContactFormListQuery),
    responses(
        (status = 200, description = "Submissions", body = inline(SuccessResponse<PageResult<ContactForm>>)),
        (status = 400, description = "Filter is not a boolean", body = ErrorResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
    )
)]
#[get("/api/admin/contact-forms")]
pub async fn list_contact_forms_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    query: web::Query<ContactFormListQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.filter()?;
    let page = state
        .contact_form
        .list(filter, query.pagination())
        .await?;

    Ok(ApiResponse::success(page))
}

/// Single submission
#[utoipa::path(
    get,
    path = "/api/admin/contact-forms/{id}",
    tag = "contact-forms",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Submission", body = inline(SuccessResponse<ContactForm>)),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[get("/api/admin/contact-forms/{id}")]
pub async fn get_contact_form_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let form = state.contact_form.get_by_id(id).await?;
    Ok(ApiResponse::success(form))
}

/// Set the read flag
#[utoipa::path(
    patch,
    path = "/api/admin/contact-forms/{id}/read",
    tag = "contact-forms",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Submission id")),
    request_body = ReadRequest,
    responses(
        (status = 200, description = "Updated submission", body = inline(SuccessResponse<ContactForm>)),
        (status = 400, description = "isRead missing or not a boolean", body = ErrorResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[patch("/api/admin/contact-forms/{id}/read")]
pub async fn mark_contact_form_read_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ReadRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let is_read = require_bool(payload.is_read.as_ref(), "isRead")?;

    let form = state.contact_form.mark_read(id, is_read).await?;
    Ok(ApiResponse::success(form))
}

/// Set the archive flag
#[utoipa::path(
    patch,
    path = "/api/admin/contact-forms/{id}/archive",
    tag = "contact-forms",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Submission id")),
    request_body = ArchiveRequest,
    responses(
        (status = 200, description = "Updated submission", body = inline(SuccessResponse<ContactForm>)),
        (status = 400, description = "isArchived missing or not a boolean", body = ErrorResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[patch("/api/admin/contact-forms/{id}/archive")]
pub async fn archive_contact_form_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ArchiveRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let is_archived = require_bool(payload.is_archived.as_ref(), "isArchived")?;

    let form = state.contact_form.archive(id, is_archived).await?;
    Ok(ApiResponse::success(form))
}
