//! # 로그인 라우터
//!
//! 요청 본문을 검증하고 인증 유스케이스를 호출한 뒤, 결과를 HTTP 응답으로
//! 변환합니다. 어떤 경우에도 실패하지 않고 항상 응답을 만들어 돌려줍니다.
//!
//! ## 응답 매핑
//!
//! | 상황 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | 요청/본문 없음 | 500 | `Internal server error` |
//! | email 없음 | 400 | `Missing param: email` |
//! | email 형식 오류 | 400 | `Invalid param: email` |
//! | password 없음 | 400 | `Missing param: password` |
//! | 인증 실패 | 401 | `Unauthorized` |
//! | 인증 성공 | 200 | `{ accessToken }` |
//! | 그 밖의 모든 에러 | 500 | `Internal server error` |
//!
//! 클라이언트 입력 검증은 라우터가 직접 하므로 400은 여기서만 만들어집니다.
//! 유스케이스가 돌려준 `MissingParam`/`InvalidParam`은 배선 문제로 보고 500으로
//! 처리합니다.
//!
//! ## 요청 상태 흐름
//!
//! ```text
//! Received → ValidatingInput → Authenticating → Authorized | Unauthorized → Responded
//!     └──────────────┴────────────────┴──→ Errored → Responded (500)
//! ```

use std::fmt;
use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{components, ComponentRegistry, Dependency};
use crate::domain::dto::auth::{LoginRequest, LoginResponse};
use crate::domain::models::auth::AuthOutcome;
use crate::services::auth::ports::{Authenticate, EmailFormatValidator};

/// 요청 하나가 거치는 처리 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteState {
    Received,
    ValidatingInput,
    Authenticating,
    Authorized,
    Unauthorized,
    Errored,
    Responded,
}

impl fmt::Display for RouteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteState::Received => "RECEIVED",
            RouteState::ValidatingInput => "VALIDATING_INPUT",
            RouteState::Authenticating => "AUTHENTICATING",
            RouteState::Authorized => "AUTHORIZED",
            RouteState::Unauthorized => "UNAUTHORIZED",
            RouteState::Errored => "ERRORED",
            RouteState::Responded => "RESPONDED",
        };
        f.write_str(name)
    }
}

/// 요청이 지나온 상태 목록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTrace {
    states: Vec<RouteState>,
}

impl RouteTrace {
    fn new() -> Self {
        Self { states: vec![RouteState::Received] }
    }

    fn enter(&mut self, next: RouteState) {
        if let Some(current) = self.states.last() {
            log::debug!("로그인 요청 상태: {} -> {}", current, next);
        }
        self.states.push(next);
    }

    pub fn states(&self) -> &[RouteState] {
        &self.states
    }

    pub fn last(&self) -> Option<RouteState> {
        self.states.last().copied()
    }
}

/// 로그인 요청 라우터
pub struct LoginRouter {
    auth_use_case: Dependency<Arc<dyn Authenticate>>,
    email_validator: Dependency<Arc<dyn EmailFormatValidator>>,
}

impl LoginRouter {
    pub fn new(
        auth_use_case: Arc<dyn Authenticate>,
        email_validator: Arc<dyn EmailFormatValidator>,
    ) -> Self {
        Self::from_dependencies(
            Dependency::Wired(auth_use_case),
            Dependency::Wired(email_validator),
        )
    }

    pub fn from_dependencies(
        auth_use_case: Dependency<Arc<dyn Authenticate>>,
        email_validator: Dependency<Arc<dyn EmailFormatValidator>>,
    ) -> Self {
        Self { auth_use_case, email_validator }
    }

    /// 레지스트리의 `authUseCase`, `emailValidator`로 라우터를 만듭니다.
    pub fn from_registry(registry: &ComponentRegistry) -> Self {
        Self::from_dependencies(
            registry.resolve(components::AUTH_USE_CASE),
            registry.resolve(components::EMAIL_VALIDATOR),
        )
    }

    /// 로그인 요청을 처리합니다.
    pub async fn handle(&self, request: Option<&LoginRequest>) -> LoginResponse {
        self.handle_traced(request).await.0
    }

    /// 응답과 함께 요청이 거친 상태 목록을 반환합니다.
    pub async fn handle_traced(&self, request: Option<&LoginRequest>) -> (LoginResponse, RouteTrace) {
        let mut trace = RouteTrace::new();

        let response = match self.try_handle(request, &mut trace).await {
            Ok(response) => response,
            Err(error) => {
                log::error!("로그인 요청 처리 중 에러 발생: {}", error);
                trace.enter(RouteState::Errored);
                LoginResponse::server_error()
            }
        };

        trace.enter(RouteState::Responded);
        (response, trace)
    }

    async fn try_handle(
        &self,
        request: Option<&LoginRequest>,
        trace: &mut RouteTrace,
    ) -> AppResult<LoginResponse> {
        trace.enter(RouteState::ValidatingInput);

        let body = request
            .and_then(|request| request.body.as_ref())
            .ok_or_else(|| AppError::InternalError("요청 본문이 없습니다".to_string()))?;

        let Some(email) = body.email() else {
            return Ok(LoginResponse::bad_request(&AppError::missing("email")));
        };

        let email_validator = self.email_validator.require(components::EMAIL_VALIDATOR)?;
        if !email_validator.is_valid(email).await? {
            return Ok(LoginResponse::bad_request(&AppError::invalid("email")));
        }

        let Some(password) = body.password() else {
            return Ok(LoginResponse::bad_request(&AppError::missing("password")));
        };

        let auth_use_case = self.auth_use_case.require(components::AUTH_USE_CASE)?;

        trace.enter(RouteState::Authenticating);
        match auth_use_case.authenticate(email, password).await? {
            AuthOutcome::Authenticated(token) => {
                trace.enter(RouteState::Authorized);
                log::info!("로그인 성공: {}", email);
                Ok(LoginResponse::ok(token))
            }
            AuthOutcome::Unauthenticated => {
                trace.enter(RouteState::Unauthorized);
                log::info!("로그인 실패 (자격 증명 불일치): {}", email);
                Ok(LoginResponse::unauthorized())
            }
        }
    }
}
