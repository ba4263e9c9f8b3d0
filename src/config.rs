use std::{env, sync::OnceLock};

use thiserror::Error;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;
use crate::modules::upload::application::domain::UploadPolicy;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Controls whether error responses expose a debug trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Test,
    Production,
}

static RUNTIME_MODE: OnceLock<RuntimeMode> = OnceLock::new();

impl RuntimeMode {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => RuntimeMode::Production,
            "test" => RuntimeMode::Test,
            _ => RuntimeMode::Development,
        }
    }

    pub fn from_env() -> Self {
        env::var("RUST_ENV")
            .map(|v| Self::parse(&v))
            .unwrap_or(RuntimeMode::Development)
    }

    pub fn is_production(self) -> bool {
        self == RuntimeMode::Production
    }

    /// Pins the process-wide mode. Only the first call wins.
    pub fn install(self) {
        let _ = RUNTIME_MODE.set(self);
    }

    pub fn current() -> Self {
        *RUNTIME_MODE.get_or_init(Self::from_env)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Test => "test",
            RuntimeMode::Production => "production",
        }
    }
}

/// Single-account admin credentials checked at login.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub mode: RuntimeMode,
    pub run_migrations: bool,
    pub jwt: JwtConfig,
    pub admin: AdminCredentials,
    pub upload: UploadPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let run_migrations = env::var("RUN_MIGRATIONS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            mode: RuntimeMode::from_env(),
            run_migrations,
            jwt: JwtConfig::from_env()?,
            admin: AdminCredentials {
                email: required("ADMIN_EMAIL")?.to_lowercase(),
                password_hash: required("ADMIN_PASSWORD_HASH")?,
            },
            upload: UploadPolicy::from_env(),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads a variable that must be present and non-blank.
pub fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
pub fn load_dotenv() {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
