use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_portfolio_cms_only".to_string(),
        issuer: "portfolio-cms".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header carrying a fresh admin token.
pub fn admin_bearer(provider: &Arc<dyn TokenProvider + Send + Sync>) -> (&'static str, String) {
    let token = provider
        .generate_access_token(TEST_ADMIN_EMAIL)
        .expect("test token should be generated");
    ("Authorization", format!("Bearer {token}"))
}

/// Signed with the test secret but already past the verification leeway.
pub fn expired_admin_bearer() -> (&'static str, String) {
    let service = JwtTokenService::new(JwtConfig {
        access_token_expiry: -120,
        ..test_jwt_config()
    });
    let token = service
        .generate_access_token(TEST_ADMIN_EMAIL)
        .expect("test token should be generated");
    ("Authorization", format!("Bearer {token}"))
}
