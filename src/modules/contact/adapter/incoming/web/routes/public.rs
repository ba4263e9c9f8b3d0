use actix_web::{get, web, HttpResponse};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::Contact;
use crate::shared::api::ApiResponse;
use crate::shared::errors::AppError;
use crate::AppState;

/// Public contact card
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Active contact", body = inline(SuccessResponse<Contact>)),
        (status = 404, description = "No active contact", body = ErrorResponse),
    )
)]
#[get("/api/contact")]
pub async fn get_contact_handler(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let contact = state.contact.get_public().await?;
    Ok(ApiResponse::success(contact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{sample_contact, StubContactUseCases};

    #[actix_web::test]
    async fn returns_contact_card() {
        let state = TestAppStateBuilder::default()
            .with_contact(StubContactUseCases::with_contact(sample_contact()))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_contact_handler)).await;

        let req = test::TestRequest::get().uri("/api/contact").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["github"], "https://github.com/janedoe");
        assert_eq!(body["data"]["isActive"], true);
    }
}
