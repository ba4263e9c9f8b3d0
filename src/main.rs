mod api;
mod config;
mod health;
mod modules;
mod shared;

#[cfg(test)]
mod tests;

use crate::config::{load_dotenv, AppConfig};
use crate::modules::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::modules::auth::application::use_cases::login_admin::{
    LoginAdminService, LoginAdminUseCase,
};
use crate::modules::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::modules::contact::application::ports::incoming::ContactUseCases;
use crate::modules::contact::application::services::ContactService;
use crate::modules::contact_form::adapter::outgoing::ContactFormRepositoryPostgres;
use crate::modules::contact_form::application::ports::incoming::ContactFormUseCases;
use crate::modules::contact_form::application::services::ContactFormService;
use crate::modules::education::adapter::outgoing::EducationRepositoryPostgres;
use crate::modules::education::application::ports::incoming::EducationUseCases;
use crate::modules::education::application::services::EducationService;
use crate::modules::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::modules::experience::application::ports::incoming::ExperienceUseCases;
use crate::modules::experience::application::services::ExperienceService;
use crate::modules::hero::adapter::outgoing::HeroRepositoryPostgres;
use crate::modules::hero::application::ports::incoming::HeroUseCases;
use crate::modules::hero::application::services::HeroService;
use crate::modules::upload::adapter::outgoing::LocalFileStorage;
use crate::modules::upload::application::ports::incoming::UploadUseCases;
use crate::modules::upload::application::services::UploadService;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::errors::AppError;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub struct AppState {
    pub login_admin_use_case: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub hero: Arc<dyn HeroUseCases + Send + Sync>,
    pub experience: Arc<dyn ExperienceUseCases + Send + Sync>,
    pub education: Arc<dyn EducationUseCases + Send + Sync>,
    pub contact: Arc<dyn ContactUseCases + Send + Sync>,
    pub contact_form: Arc<dyn ContactFormUseCases + Send + Sync>,
    pub upload: Arc<dyn UploadUseCases + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
async fn start(config: AppConfig) -> anyhow::Result<()> {
    info!(mode = config.mode.as_str(), "Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Upload directory must exist before the first write
    tokio::fs::create_dir_all(&config.upload.upload_dir)
        .await
        .with_context(|| format!("cannot create {}", config.upload.upload_dir.display()))?;

    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());

    let login_admin_use_case = LoginAdminService::new(
        config.admin.clone(),
        password_hasher,
        Arc::new(jwt_service.clone()),
    );

    let state = web::Data::new(AppState {
        login_admin_use_case: Arc::new(login_admin_use_case),
        hero: Arc::new(HeroService::new(HeroRepositoryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        experience: Arc::new(ExperienceService::new(ExperienceRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        education: Arc::new(EducationService::new(EducationRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        contact: Arc::new(ContactService::new(ContactRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        contact_form: Arc::new(ContactFormService::new(ContactFormRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        upload: Arc::new(UploadService::new(
            LocalFileStorage::new(config.upload.upload_dir.clone()),
            config.upload.clone(),
        )),
    });

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/api/docs/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
            .default_service(web::to(route_not_found))
    })
    .bind(&server_url)
    .with_context(|| format!("cannot bind {server_url}"))?
    .run()
    .await?;

    // The server future has ended; repositories still hold clones of the handle
    close_database(&db_arc).await?;
    info!("Shutdown complete");

    Ok(())
}

/// Closes the shared pool without needing sole ownership of the handle.
async fn close_database(db: &DatabaseConnection) -> anyhow::Result<()> {
    db.close_by_ref()
        .await
        .context("failed to close database")
}

async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found("Route"))
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{auth, contact, contact_form, education, experience, hero, upload};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(auth::adapter::incoming::web::routes::verify_admin_handler);
    // Hero
    cfg.service(hero::adapter::incoming::web::routes::get_hero_handler);
    cfg.service(hero::adapter::incoming::web::routes::list_heroes_handler);
    cfg.service(hero::adapter::incoming::web::routes::create_hero_handler);
    cfg.service(hero::adapter::incoming::web::routes::replace_hero_handler);
    cfg.service(hero::adapter::incoming::web::routes::deactivate_hero_handler);
    // Experience
    cfg.service(experience::adapter::incoming::web::routes::list_experiences_handler);
    cfg.service(experience::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::list_experiences_admin_handler);
    cfg.service(experience::adapter::incoming::web::routes::get_experience_admin_handler);
    cfg.service(experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::replace_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::deactivate_experience_handler);
    // Education
    cfg.service(education::adapter::incoming::web::routes::list_education_handler);
    cfg.service(education::adapter::incoming::web::routes::get_education_handler);
    cfg.service(education::adapter::incoming::web::routes::list_education_admin_handler);
    cfg.service(education::adapter::incoming::web::routes::get_education_admin_handler);
    cfg.service(education::adapter::incoming::web::routes::create_education_handler);
    cfg.service(education::adapter::incoming::web::routes::replace_education_handler);
    cfg.service(education::adapter::incoming::web::routes::deactivate_education_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::get_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::list_contacts_handler);
    cfg.service(contact::adapter::incoming::web::routes::get_contact_admin_handler);
    cfg.service(contact::adapter::incoming::web::routes::create_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::replace_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::deactivate_contact_handler);
    // Contact forms
    cfg.service(contact_form::adapter::incoming::web::routes::submit_contact_form_handler);
    cfg.service(contact_form::adapter::incoming::web::routes::list_contact_forms_handler);
    cfg.service(contact_form::adapter::incoming::web::routes::get_contact_form_handler);
    cfg.service(contact_form::adapter::incoming::web::routes::mark_contact_form_read_handler);
    cfg.service(contact_form::adapter::incoming::web::routes::archive_contact_form_handler);
    // Uploads
    cfg.service(upload::adapter::incoming::web::routes::upload_file_handler);
    cfg.service(upload::adapter::incoming::web::routes::serve_file_handler);
}

/// `hash-password <plain>` prints a PHC string for `ADMIN_PASSWORD_HASH`.
#[cfg(not(tarpaulin_include))]
async fn hash_password(plain: &str) -> anyhow::Result<()> {
    let hash = Argon2Hasher::new()
        .hash_password(plain)
        .await
        .context("failed to hash password")?;
    println!("{hash}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [cmd, plain] if cmd == "hash-password" => {
            actix_web::rt::System::new().block_on(hash_password(plain))
        }
        [cmd, ..] if cmd == "hash-password" => Err(anyhow::anyhow!("usage: hash-password <plain>")),
        _ => {
            load_dotenv();
            AppConfig::from_env()
                .context("invalid configuration")
                .and_then(|config| {
                    config.mode.install();
                    actix_web::rt::System::new().block_on(start(config))
                })
        }
    };

    if let Err(e) = result {
        tracing::error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod main_tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn unknown_route_uses_error_envelope() {
        let app = test::init_service(
            App::new()
                .service(crate::health::health)
                .default_service(web::to(route_not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Route not found");
    }

    #[actix_web::test]
    async fn pool_closes_while_other_handles_are_alive() {
        let db = Arc::new(
            sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection(),
        );
        let repository_handle = Arc::clone(&db);

        close_database(&db).await.unwrap();
        assert_eq!(Arc::strong_count(&repository_handle), 2);
    }

    #[actix_web::test]
    async fn closing_a_disconnected_handle_reports_context() {
        let err = close_database(&DatabaseConnection::Disconnected)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to close database");
    }
}
