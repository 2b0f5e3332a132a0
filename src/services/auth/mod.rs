//! 인증 서비스 모듈
//!
//! 이메일/비밀번호 로그인 파이프라인의 포트와 구현체를 제공합니다.
//!
//! # Features
//!
//! - [`ports`] - 파이프라인이 의존하는 협력 객체 계약
//! - [`auth_usecase`] - 검증 순서와 인증 결과를 결정하는 유스케이스
//! - [`token_service`] - HS256 JWT 액세스 토큰 발급
//! - [`password_service`] - bcrypt 비밀번호 비교
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{AuthUseCase, BcryptPasswordComparer, TokenService};
//!
//! let use_case = AuthUseCase::new(
//!     Arc::new(user_repository),
//!     Arc::new(BcryptPasswordComparer::new()),
//!     Arc::new(TokenService::from_config()),
//! );
//! let outcome = use_case.authenticate("user@example.com", "password123").await?;
//! ```

pub mod ports;
pub mod auth_usecase;
pub mod token_service;
pub mod password_service;

pub use ports::*;
pub use auth_usecase::*;
pub use token_service::*;
pub use password_service::*;
