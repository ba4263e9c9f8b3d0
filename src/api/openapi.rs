use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::login_admin::{
    LoginRequestDto, LoginResponse,
};
use crate::modules::auth::adapter::incoming::web::routes::verify_admin::VerifyResponse;
use crate::modules::auth::application::domain::entities::AdminIdentity;
use crate::modules::contact::adapter::incoming::web::routes::ContactRequest;
use crate::modules::contact::application::domain::Contact;
use crate::modules::contact_form::adapter::incoming::web::routes::{
    ArchiveRequest, ContactFormRequest, ReadRequest,
};
use crate::modules::contact_form::application::domain::ContactForm;
use crate::modules::education::adapter::incoming::web::routes::EducationRequest;
use crate::modules::education::application::domain::Education;
use crate::modules::experience::adapter::incoming::web::routes::ExperienceRequest;
use crate::modules::experience::application::domain::Experience;
use crate::modules::hero::adapter::incoming::web::routes::HeroRequest;
use crate::modules::hero::application::domain::Hero;
use crate::modules::upload::application::domain::StoredFile;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content API behind a personal portfolio site and its admin dashboard",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::login_admin::login_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::verify_admin::verify_admin_handler,

        // Hero endpoints
        crate::modules::hero::adapter::incoming::web::routes::public::get_hero_handler,
        crate::modules::hero::adapter::incoming::web::routes::admin::list_heroes_handler,
        crate::modules::hero::adapter::incoming::web::routes::admin::create_hero_handler,
        crate::modules::hero::adapter::incoming::web::routes::admin::replace_hero_handler,
        crate::modules::hero::adapter::incoming::web::routes::admin::deactivate_hero_handler,

        // Experience endpoints
        crate::modules::experience::adapter::incoming::web::routes::public::list_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::public::get_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::admin::list_experiences_admin_handler,
        crate::modules::experience::adapter::incoming::web::routes::admin::get_experience_admin_handler,
        crate::modules::experience::adapter::incoming::web::routes::admin::create_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::admin::replace_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::admin::deactivate_experience_handler,

        // Education endpoints
        crate::modules::education::adapter::incoming::web::routes::public::list_education_handler,
        crate::modules::education::adapter::incoming::web::routes::public::get_education_handler,
        crate::modules::education::adapter::incoming::web::routes::admin::list_education_admin_handler,
        crate::modules::education::adapter::incoming::web::routes::admin::get_education_admin_handler,
        crate::modules::education::adapter::incoming::web::routes::admin::create_education_handler,
        crate::modules::education::adapter::incoming::web::routes::admin::replace_education_handler,
        crate::modules::education::adapter::incoming::web::routes::admin::deactivate_education_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::public::get_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::admin::list_contacts_handler,
        crate::modules::contact::adapter::incoming::web::routes::admin::get_contact_admin_handler,
        crate::modules::contact::adapter::incoming::web::routes::admin::create_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::admin::replace_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::admin::deactivate_contact_handler,

        // Contact form endpoints
        crate::modules::contact_form::adapter::incoming::web::routes::public::submit_contact_form_handler,
        crate::modules::contact_form::adapter::incoming::web::routes::admin::list_contact_forms_handler,
        crate::modules::contact_form::adapter::incoming::web::routes::admin::get_contact_form_handler,
        crate::modules::contact_form::adapter::incoming::web::routes::admin::mark_contact_form_read_handler,
        crate::modules::contact_form::adapter::incoming::web::routes::admin::archive_contact_form_handler,

        // Upload endpoints
        crate::modules::upload::adapter::incoming::web::routes::upload_file::upload_file_handler,
        crate::modules::upload::adapter::incoming::web::routes::serve_file::serve_file_handler,

        // Probes
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            MessageResponse,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            VerifyResponse,
            AdminIdentity,

            // Content
            Hero,
            HeroRequest,
            Experience,
            ExperienceRequest,
            Education,
            EducationRequest,
            Contact,
            ContactRequest,
            ContactForm,
            ContactFormRequest,
            ReadRequest,
            ArchiveRequest,
            StoredFile,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin login and token checks"),
        (name = "hero", description = "Landing page hero section"),
        (name = "experience", description = "Work experience entries"),
        (name = "education", description = "Education entries"),
        (name = "contact", description = "Public contact card"),
        (name = "contact-forms", description = "Visitor messages and the admin inbox"),
        (name = "uploads", description = "Image and document uploads"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
