//! # 인증 유스케이스
//!
//! 이메일/비밀번호로 사용자를 인증하고 액세스 토큰을 발급하는 핵심 로직입니다.
//!
//! ## 처리 순서
//!
//! ```text
//! authenticate(email, password)
//!   │
//!   ├─ 1. email 비어 있음            → MissingParam("email")
//!   ├─ 2. password 비어 있음         → MissingParam("password")
//!   ├─ 3. userLookup 없음/부적합     → MissingParam / InvalidParam("userLookup")
//!   ├─ 4. passwordComparer 없음/부적합 → MissingParam / InvalidParam("passwordComparer")
//!   ├─ 5. tokenIssuer 없음/부적합    → MissingParam / InvalidParam("tokenIssuer")
//!   ├─ 6. accessTokenRecorder 부적합 → InvalidParam("accessTokenRecorder") (없으면 생략)
//!   │
//!   ├─ find_by_email(email)          → None이면 Unauthenticated
//!   ├─ matches(password, hash)       → false면 Unauthenticated
//!   ├─ issue(user.id)                → None 또는 빈 토큰이면 Unauthenticated
//!   ├─ record(user.id, token)        (recorder가 연결된 경우만)
//!   └─ Authenticated(token)
//! ```
//!
//! 첫 번째로 실패한 검사만 보고하며, 협력 객체에서 올라온 에러는 가공하지 않고
//! 그대로 호출자에게 전달합니다.
use std::sync::Arc;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{components, ComponentRegistry, Dependency};
use crate::domain::models::auth::AuthOutcome;
use crate::services::auth::ports::{
    AccessTokenRecorder, Authenticate, PasswordComparer, TokenIssuer, UserLookup,
};

/// 인증 유스케이스
///
/// 생성 시점에 고정된 협력 객체 참조 외에는 상태가 없으므로
/// `Arc`로 감싸 여러 워커에서 잠금 없이 공유할 수 있습니다.
#[derive(Debug)]
pub struct AuthUseCase {
    user_lookup: Dependency<Arc<dyn UserLookup>>,
    password_comparer: Dependency<Arc<dyn PasswordComparer>>,
    token_issuer: Dependency<Arc<dyn TokenIssuer>>,
    access_token_recorder: Dependency<Arc<dyn AccessTokenRecorder>>,
}

impl AuthUseCase {
    /// 정적으로 타입이 보장된 협력 객체로 유스케이스를 만듭니다.
    pub fn new(
        user_lookup: Arc<dyn UserLookup>,
        password_comparer: Arc<dyn PasswordComparer>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self::from_dependencies(
            Dependency::Wired(user_lookup),
            Dependency::Wired(password_comparer),
            Dependency::Wired(token_issuer),
        )
    }

    /// 조회 결과(`Dependency`) 그대로 유스케이스를 만듭니다.
    ///
    /// 빠졌거나 부적합한 협력 객체는 `authenticate` 호출 시점에 에러로 보고됩니다.
    pub fn from_dependencies(
        user_lookup: Dependency<Arc<dyn UserLookup>>,
        password_comparer: Dependency<Arc<dyn PasswordComparer>>,
        token_issuer: Dependency<Arc<dyn TokenIssuer>>,
    ) -> Self {
        Self {
            user_lookup,
            password_comparer,
            token_issuer,
            access_token_recorder: Dependency::Missing,
        }
    }

    /// 레지스트리에서 협력 객체를 찾아 유스케이스를 만듭니다.
    ///
    /// `accessTokenRecorder`는 선택 사항입니다.
    pub fn from_registry(registry: &ComponentRegistry) -> Self {
        Self {
            user_lookup: registry.resolve(components::USER_LOOKUP),
            password_comparer: registry.resolve(components::PASSWORD_COMPARER),
            token_issuer: registry.resolve(components::TOKEN_ISSUER),
            access_token_recorder: registry.resolve(components::ACCESS_TOKEN_RECORDER),
        }
    }

    /// 발급된 토큰을 기록할 recorder를 연결합니다.
    pub fn with_access_token_recorder(mut self, recorder: Arc<dyn AccessTokenRecorder>) -> Self {
        self.access_token_recorder = Dependency::Wired(recorder);
        self
    }
}

#[async_trait]
impl Authenticate for AuthUseCase {
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        if email.is_empty() {
            return Err(AppError::missing("email"));
        }

        if password.is_empty() {
            return Err(AppError::missing("password"));
        }

        let user_lookup = self.user_lookup.require(components::USER_LOOKUP)?;
        let password_comparer = self.password_comparer.require(components::PASSWORD_COMPARER)?;
        let token_issuer = self.token_issuer.require(components::TOKEN_ISSUER)?;
        let access_token_recorder = self
            .access_token_recorder
            .optional(components::ACCESS_TOKEN_RECORDER)?;

        let Some(user) = user_lookup.find_by_email(email).await? else {
            log::debug!("등록되지 않은 이메일: {}", email);
            return Ok(AuthOutcome::Unauthenticated);
        };

        if !password_comparer.matches(password, &user.password_hash).await? {
            log::debug!("비밀번호 불일치 - 사용자 ID: {}", user.id);
            return Ok(AuthOutcome::Unauthenticated);
        }

        let outcome = AuthOutcome::from_issued(token_issuer.issue(&user.id).await?);

        if let (Some(recorder), AuthOutcome::Authenticated(token)) = (access_token_recorder, &outcome) {
            recorder.record(&user.id, token).await?;
        }

        Ok(outcome)
    }
}
