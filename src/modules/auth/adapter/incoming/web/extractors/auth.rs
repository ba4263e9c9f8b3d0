use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::domain::entities::AdminIdentity;
use crate::modules::auth::application::ports::outgoing::{
    TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::errors::AppError;

pub const NO_TOKEN: &str = "Not authorized, no token";

/// Gate for admin routes. Extraction fails before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub identity: AdminIdentity,
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AdminUser, AppError> {
    let provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| AppError::internal("token provider is not registered"))?;

    let token = extract_token_from_header(req).ok_or_else(|| AppError::unauthorized(NO_TOKEN))?;

    let claims = provider.verify_token(&token)?;

    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(TokenError::InvalidTokenType(ACCESS_TOKEN_TYPE.to_string()).into());
    }

    Ok(AdminUser {
        identity: AdminIdentity::new(claims.sub),
    })
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, HttpResponse};
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::modules::auth::application::ports::outgoing::TokenClaims;
    use crate::tests::support::auth_helper::{test_jwt_config, test_token_provider};

    #[get("/protected")]
    async fn protected(admin: AdminUser, ran: web::Data<AtomicBool>) -> HttpResponse {
        ran.store(true, Ordering::SeqCst);
        HttpResponse::Ok().json(serde_json::json!({ "email": admin.identity.email }))
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    async fn call(
        provider: Arc<dyn TokenProvider + Send + Sync>,
        auth_header: Option<String>,
    ) -> (StatusCode, serde_json::Value, bool) {
        let ran = web::Data::new(AtomicBool::new(false));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(provider))
                .app_data(ran.clone())
                .service(protected),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/protected");
        if let Some(value) = auth_header {
            req = req.insert_header(("Authorization", value));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let json = read_json(resp).await;
        (status, json, ran.load(Ordering::SeqCst))
    }

    #[actix_web::test]
    async fn valid_token_exposes_identity() {
        let provider = test_token_provider();
        let token = provider.generate_access_token("admin@example.com").unwrap();

        let (status, json, ran) = call(provider, Some(format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["email"], "admin@example.com");
        assert!(ran);
    }

    #[actix_web::test]
    async fn missing_header_is_rejected() {
        let (status, json, ran) = call(test_token_provider(), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], NO_TOKEN);
        assert!(!ran);
    }

    #[actix_web::test]
    async fn non_bearer_header_is_rejected() {
        let (status, json, ran) =
            call(test_token_provider(), Some("Basic YWRtaW46cGFzcw==".into())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], NO_TOKEN);
        assert!(!ran);
    }

    #[actix_web::test]
    async fn malformed_token_is_invalid() {
        let (status, json, ran) =
            call(test_token_provider(), Some("Bearer not.a.token".into())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid token");
        assert!(!ran);
    }

    #[actix_web::test]
    async fn expired_token_is_rejected_before_handler() {
        let expired = JwtTokenService::new(JwtConfig {
            access_token_expiry: -120,
            ..test_jwt_config()
        });
        let token = expired.generate_access_token("admin@example.com").unwrap();

        let (status, json, ran) = call(test_token_provider(), Some(format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Token expired");
        assert!(!ran, "handler must not run for an expired token");
    }

    #[actix_web::test]
    async fn wrong_token_type_is_invalid() {
        struct RefreshOnly;

        impl TokenProvider for RefreshOnly {
            fn generate_access_token(&self, _subject: &str) -> Result<String, TokenError> {
                unimplemented!("not used")
            }

            fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
                Ok(TokenClaims {
                    sub: "admin@example.com".into(),
                    exp: 9_999_999_999,
                    iat: 0,
                    nbf: 0,
                    iss: "portfolio-cms".into(),
                    token_type: "refresh".into(),
                })
            }
        }

        let (status, json, ran) = call(Arc::new(RefreshOnly), Some("Bearer x".into())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Invalid token");
        assert!(!ran);
    }
}
