use async_trait::async_trait;
use std::sync::Arc;

use crate::config::AdminCredentials;
use crate::modules::auth::application::domain::entities::AdminIdentity;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::shared::errors::AppError;
use crate::shared::validation::{is_valid_email, messages, ValidationErrors};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ========================= Login Request =========================

/// Validated login input: email normalized, password non-empty.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        let email = email.trim().to_lowercase();
        let mut violations = Vec::new();

        if email.is_empty() {
            violations.push(messages::required("Email"));
        } else if !is_valid_email(&email) {
            violations.push(messages::invalid_format("Email"));
        }

        if password.is_empty() {
            violations.push(messages::required("Password"));
        }

        if !violations.is_empty() {
            return Err(ValidationErrors::new(violations));
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Use Case =========================

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub admin: AdminIdentity,
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutcome, AppError>;
}

pub struct LoginAdminService {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginAdminService {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutcome, AppError> {
        let email_matches = request.email() == self.credentials.email;

        // Verified even for an unknown email; constant-time w.r.t. the email check
        let password_matches = self
            .password_hasher
            .verify_password(request.password(), &self.credentials.password_hash)
            .await
            .map_err(|e| AppError::internal(format!("admin password check failed: {e}")))?;

        if !(email_matches && password_matches) {
            tracing::warn!(email = %request.email(), "Rejected admin login");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self.token_provider.generate_access_token(request.email())?;
        tracing::info!(email = %request.email(), "Admin logged in");

        Ok(LoginOutcome {
            token,
            admin: AdminIdentity::new(request.email()),
        })
    }
}
