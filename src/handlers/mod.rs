//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 웹 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ POST /api/login
//! ┌─────────────────────▼───────────────────────┐
//!   auth::login          - actix-web 엔드포인트
//! ├─────────────────────────────────────────────┤
//!   LoginRouter          - 입력 검증, 응답 매핑
//! ├─────────────────────────────────────────────┤
//!   AuthUseCase          - 인증 로직
//! ├─────────────────────────────────────────────┤
//!   UserRepository / BcryptPasswordComparer / TokenService
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`login_router`**: 프레임워크에 독립적인 로그인 라우터
//! - **`auth`**: 라우터를 actix-web에 연결하는 핸들러

pub mod auth;
pub mod login_router;

pub use login_router::*;
