//! 로그인 서비스 백엔드
//!
//! 이메일/비밀번호로 사용자를 인증하고 액세스 토큰을 발급하는 Rust 기반 서비스입니다.
//! 입력 검증, 사용자 조회, 비밀번호 비교, 토큰 발급 각 단계는 포트(trait)로 분리되어
//! [`core::registry::ComponentRegistry`]를 통해 조립됩니다.
//!
//! # Features
//!
//! - **로그인 라우터**: 요청 검증 후 결과를 400/401/200/500 응답으로 매핑
//! - **인증 유스케이스**: 조회 → 비교 → 발급 순서의 인증 파이프라인
//! - **JWT 발급**: HS256 서명 액세스 토큰
//! - **bcrypt**: 저장된 해시와 평문 비밀번호 비교
//! - **MongoDB**: 사용자 조회 및 발급된 토큰 기록
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /api/login, GET /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   LoginRouter   │ ← 입력 검증, 응답 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AuthUseCase   │ ← 인증 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use login_service_backend::composers::{compose_login_router, register_defaults, register_user_store};
//! use login_service_backend::core::registry::ComponentRegistry;
//!
//! let mut registry = ComponentRegistry::new();
//! register_user_store(&mut registry, Arc::new(UserRepository::new(&database)));
//! register_defaults(&mut registry);
//!
//! let router = compose_login_router(&mut registry);
//! let response = router.handle(Some(&request)).await;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod composers;

#[cfg(test)]
pub(crate) mod test_support;
