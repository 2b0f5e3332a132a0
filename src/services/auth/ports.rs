//! 인증 파이프라인 포트 정의
//!
//! 유스케이스와 라우터가 의존하는 외부 기능들의 계약입니다.
//! 구현체는 생성 시점에 `Arc<dyn Port>`로 주입되며, 모든 호출은
//! I/O가 일어날 수 있으므로 비동기입니다.
//!
//! | 포트 | 기본 구현체 |
//! |------|-------------|
//! | [`EmailFormatValidator`] | `utils::email_validator::EmailValidator` |
//! | [`UserLookup`] | `repositories::users::UserRepository` |
//! | [`PasswordComparer`] | `services::auth::BcryptPasswordComparer` |
//! | [`TokenIssuer`] | `services::auth::TokenService` |
//! | [`AccessTokenRecorder`] | `repositories::users::UserRepository` |
//! | [`Authenticate`] | `services::auth::AuthUseCase` |
use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::UserRecord;
use crate::domain::models::auth::{AccessToken, AuthOutcome};

/// 이메일 형식 검증
#[async_trait]
pub trait EmailFormatValidator: Send + Sync {
    async fn is_valid(&self, email: &str) -> AppResult<bool>;
}

/// 이메일로 사용자 조회
///
/// 일치하는 사용자가 없으면 `Ok(None)`, 저장소 장애일 때만 `Err`입니다.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;
}

/// 평문 비밀번호와 저장된 해시 비교
#[async_trait]
pub trait PasswordComparer: Send + Sync {
    async fn matches(&self, plain: &str, hash: &str) -> AppResult<bool>;
}

/// 사용자 ID로 서명된 액세스 토큰 발급
///
/// 토큰을 만들지 않기로 하면 `Ok(None)`을 반환할 수 있습니다.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, user_id: &str) -> AppResult<Option<AccessToken>>;
}

/// 발급한 액세스 토큰을 사용자 문서에 기록
#[async_trait]
pub trait AccessTokenRecorder: Send + Sync {
    async fn record(&self, user_id: &str, token: &AccessToken) -> AppResult<()>;
}

/// 라우터가 호출하는 인증 유스케이스
#[async_trait]
pub trait Authenticate: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthOutcome>;
}
