use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::use_cases::login_admin::{
    LoginAdminUseCase, LoginOutcome, LoginRequest, INVALID_CREDENTIALS,
};
use crate::modules::contact::application::ports::incoming::ContactUseCases;
use crate::modules::contact_form::application::ports::incoming::ContactFormUseCases;
use crate::modules::education::application::ports::incoming::EducationUseCases;
use crate::modules::experience::application::ports::incoming::ExperienceUseCases;
use crate::modules::hero::application::ports::incoming::HeroUseCases;
use crate::modules::upload::adapter::outgoing::LocalFileStorage;
use crate::modules::upload::application::domain::UploadPolicy;
use crate::modules::upload::application::ports::incoming::UploadUseCases;
use crate::modules::upload::application::services::UploadService;
use crate::shared::errors::AppError;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Rejects every login; tests that exercise login swap in their own.
struct RejectingLogin;

#[async_trait]
impl LoginAdminUseCase for RejectingLogin {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginOutcome, AppError> {
        Err(AppError::unauthorized(INVALID_CREDENTIALS))
    }
}

pub struct TestAppStateBuilder {
    login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    hero: Arc<dyn HeroUseCases + Send + Sync>,
    experience: Arc<dyn ExperienceUseCases + Send + Sync>,
    education: Arc<dyn EducationUseCases + Send + Sync>,
    contact: Arc<dyn ContactUseCases + Send + Sync>,
    contact_form: Arc<dyn ContactFormUseCases + Send + Sync>,
    upload: Arc<dyn UploadUseCases + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        // Never written to unless a test stores a file
        let upload_dir = std::env::temp_dir().join("portfolio-cms-test-uploads");

        Self {
            login_admin: Arc::new(RejectingLogin),
            hero: Arc::new(StubHeroUseCases::default()),
            experience: Arc::new(StubExperienceUseCases::default()),
            education: Arc::new(StubEducationUseCases::default()),
            contact: Arc::new(StubContactUseCases::default()),
            contact_form: Arc::new(StubContactFormUseCases::default()),
            upload: Arc::new(UploadService::new(
                LocalFileStorage::new(upload_dir.clone()),
                UploadPolicy::new(upload_dir),
            )),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_hero(mut self, uc: impl HeroUseCases + Send + Sync + 'static) -> Self {
        self.hero = Arc::new(uc);
        self
    }

    pub fn with_experience(mut self, uc: impl ExperienceUseCases + Send + Sync + 'static) -> Self {
        self.experience = Arc::new(uc);
        self
    }

    pub fn with_education(mut self, uc: impl EducationUseCases + Send + Sync + 'static) -> Self {
        self.education = Arc::new(uc);
        self
    }

    pub fn with_contact(mut self, uc: impl ContactUseCases + Send + Sync + 'static) -> Self {
        self.contact = Arc::new(uc);
        self
    }

    pub fn with_contact_form(
        mut self,
        uc: impl ContactFormUseCases + Send + Sync + 'static,
    ) -> Self {
        self.contact_form = Arc::new(uc);
        self
    }

    pub fn with_upload(mut self, uc: impl UploadUseCases + Send + Sync + 'static) -> Self {
        self.upload = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin_use_case: self.login_admin,
            hero: self.hero,
            experience: self.experience,
            education: self.education,
            contact: self.contact,
            contact_form: self.contact_form,
            upload: self.upload,
        })
    }
}
