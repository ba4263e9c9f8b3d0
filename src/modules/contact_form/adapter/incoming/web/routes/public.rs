use actix_web::{post, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::contact_form::application::domain::ContactFormDraft;
use crate::shared::api::ApiResponse;
use crate::shared::errors::AppError;
use crate::AppState;

use super::dto::ContactFormRequest;

/// Submit the contact form
///
/// Public endpoint; input is sanitized and validated before it is stored.
#[utoipa::path(
    post,
    path = "/api/contact-forms",
    tag = "contact-forms",
    request_body = ContactFormRequest,
    responses(
        (status = 201, description = "Message stored", body = MessageResponse,
            example = json!({ "success": true, "message": "Message sent successfully" })),
        (status = 400, description = "Validation failed", body = ErrorResponse),
    )
)]
#[post("/api/contact-forms")]
pub async fn submit_contact_form_handler(
    state: web::Data<AppState>,
    payload: web::Json<ContactFormRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = ContactFormDraft::try_from(payload.into_inner())?;
    state.contact_form.submit(draft).await?;
    Ok(ApiResponse::created_message("Message sent successfully"))
}
