//! # Login Router Composer
//!
//! 애플리케이션 시작 시점에 포트 구현체를 [`ComponentRegistry`]에 등록하고
//! 로그인 라우터를 조립합니다.
//!
//! ```text
//! register_user_store   → userLookup, accessTokenRecorder (UserRepository)
//! register_defaults     → passwordComparer (bcrypt), tokenIssuer (JWT), emailValidator
//! compose_login_router  → authUseCase 등록 후 LoginRouter 반환
//! ```

use std::sync::Arc;
use crate::core::registry::{components, ComponentRegistry};
use crate::handlers::login_router::LoginRouter;
use crate::repositories::users::UserRepository;
use crate::services::auth::{
    AccessTokenRecorder, AuthUseCase, Authenticate, BcryptPasswordComparer, EmailFormatValidator,
    PasswordComparer, TokenIssuer, TokenService, UserLookup,
};
use crate::utils::email_validator::EmailValidator;

/// MongoDB 사용자 저장소를 조회/기록 포트로 등록합니다.
pub fn register_user_store(registry: &mut ComponentRegistry, user_repository: Arc<UserRepository>) {
    registry
        .register::<Arc<dyn UserLookup>>(components::USER_LOOKUP, user_repository.clone())
        .register::<Arc<dyn AccessTokenRecorder>>(components::ACCESS_TOKEN_RECORDER, user_repository);
}

/// 저장소와 무관한 기본 구현체들을 등록합니다.
pub fn register_defaults(registry: &mut ComponentRegistry) {
    registry
        .register::<Arc<dyn PasswordComparer>>(
            components::PASSWORD_COMPARER,
            Arc::new(BcryptPasswordComparer::new()),
        )
        .register::<Arc<dyn TokenIssuer>>(
            components::TOKEN_ISSUER,
            Arc::new(TokenService::from_config()),
        )
        .register::<Arc<dyn EmailFormatValidator>>(
            components::EMAIL_VALIDATOR,
            Arc::new(EmailValidator::new()),
        );
}

/// 등록된 구현체로 인증 유스케이스와 로그인 라우터를 조립합니다.
///
/// 빠진 구현체가 있어도 조립은 성공하며, 요청 처리 시 500으로 보고됩니다.
pub fn compose_login_router(registry: &mut ComponentRegistry) -> LoginRouter {
    let auth_use_case = AuthUseCase::from_registry(registry);
    log::debug!("인증 유스케이스 조립: {:?}", auth_use_case);

    registry.register::<Arc<dyn Authenticate>>(components::AUTH_USE_CASE, Arc::new(auth_use_case));

    LoginRouter::from_registry(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use crate::domain::dto::auth::LoginRequest;
    use crate::domain::entities::users::UserRecord;
    use crate::core::errors::AppError;
    use crate::test_support::UserLookupSpy;

    fn compose_with(user_lookup: UserLookupSpy) -> LoginRouter {
        let mut registry = ComponentRegistry::new();
        register_defaults(&mut registry);
        registry.register::<Arc<dyn UserLookup>>(components::USER_LOOKUP, Arc::new(user_lookup));
        compose_login_router(&mut registry)
    }

    fn stored_user() -> UserRecord {
        UserRecord::new("any_id", bcrypt::hash("right", 4).unwrap())
    }

    async fn post(router: &LoginRouter, body: &str) -> crate::domain::dto::auth::LoginResponse {
        router.handle(Some(&LoginRequest::from_bytes(body.as_bytes()))).await
    }

    #[actix_web::test]
    async fn test_request_without_email() {
        let router = compose_with(UserLookupSpy::returning(Some(stored_user())));

        let response = post(&router, r#"{"password":"x"}"#).await;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert!(response.error_message().unwrap().contains("email"));
    }

    #[actix_web::test]
    async fn test_request_with_malformed_email() {
        let router = compose_with(UserLookupSpy::returning(Some(stored_user())));

        let response = post(&router, r#"{"email":"not-an-email","password":"x"}"#).await;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_message(), Some("Invalid param: email"));
    }

    #[actix_web::test]
    async fn test_wrong_password() {
        let router = compose_with(UserLookupSpy::returning(Some(stored_user())));

        let response = post(&router, r#"{"email":"a@b.com","password":"wrong"}"#).await;

        assert_eq!(response.status_code, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_right_password() {
        let router = compose_with(UserLookupSpy::returning(Some(stored_user())));

        let response = post(&router, r#"{"email":"a@b.com","password":"right"}"#).await;

        assert_eq!(response.status_code, StatusCode::OK);
        assert!(!response.access_token().unwrap_or_default().is_empty());
    }

    #[actix_web::test]
    async fn test_store_outage() {
        let router = compose_with(UserLookupSpy::failing(AppError::DatabaseError("store outage".to_string())));

        let response = post(&router, r#"{"email":"a@b.com","password":"right"}"#).await;

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error_message(), Some("Internal server error"));
    }

    #[actix_web::test]
    async fn test_missing_user_store_is_a_server_error() {
        let mut registry = ComponentRegistry::new();
        register_defaults(&mut registry);
        let router = compose_login_router(&mut registry);

        let response = post(&router, r#"{"email":"a@b.com","password":"right"}"#).await;

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
