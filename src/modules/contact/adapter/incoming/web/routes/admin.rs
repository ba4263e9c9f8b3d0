use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::{Contact, ContactDraft};
use crate::shared::api::{parse_resource_id, ApiResponse};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::PageQuery;
use crate::AppState;

use super::dto::ContactRequest;

/// List contacts (admin)
#[utoipa::path(
    get,
    path = "/api/admin/contact",
    tag = "contact",
    security(("BearerAuth" = [])),
    params(
        ("page" = Option<String>, Query, description = "Page number, defaults to 1"),
        ("limit" = Option<String>, Query, description = "Page size, defaults to 10, capped at 100"),
    ),
    responses(
        (status = 200, description = "Contacts", body = inline(SuccessResponse<PageResult<Contact>>)),
        (status = 401, description = "Not authorized", body = ErrorResponse),
    )
)]
#[get("/api/admin/contact")]
pub async fn list_contacts_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state.contact.list(query.pagination()).await?;
    Ok(ApiResponse::success(page))
}

/// Get contact (admin)
#[utoipa::path(
    get,
    path = "/api/admin/contact/{id}",
    tag = "contact",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact", body = inline(SuccessResponse<Contact>)),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[get("/api/admin/contact/{id}")]
pub async fn get_contact_admin_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let contact = state.contact.get_by_id(id).await?;
    Ok(ApiResponse::success(contact))
}

/// Create contact
#[utoipa::path(
    post,
    path = "/api/admin/contact",
    tag = "contact",
    security(("BearerAuth" = [])),
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Contact created", body = inline(SuccessResponse<Contact>)),
        (status = 400, description = "Validation failed or email already used", body = ErrorResponse,
            example = json!({ "success": false, "error": "Duplicate field value entered" })),
    )
)]
#[post("/api/admin/contact")]
pub async fn create_contact_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = ContactDraft::try_from(payload.into_inner())?;
    let contact = state.contact.create(draft).await?;
    Ok(ApiResponse::created(contact))
}

/// Replace contact
#[utoipa::path(
    put,
    path = "/api/admin/contact/{id}",
    tag = "contact",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Contact id")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact replaced", body = inline(SuccessResponse<Contact>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[put("/api/admin/contact/{id}")]
pub async fn replace_contact_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ContactRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    let draft = ContactDraft::try_from(payload.into_inner())?;
    let contact = state.contact.replace(id, draft).await?;
    Ok(ApiResponse::success(contact))
}

/// Deactivate contact
#[utoipa::path(
    delete,
    path = "/api/admin/contact/{id}",
    tag = "contact",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact deactivated", body = MessageResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorResponse),
    )
)]
#[delete("/api/admin/contact/{id}")]
pub async fn deactivate_contact_handler(
    _admin: AdminUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_resource_id(&path)?;
    state.contact.deactivate(id).await?;
    Ok(ApiResponse::message("Contact deleted successfully"))
}
