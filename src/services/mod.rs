//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 협력 객체는 전역 싱글톤이 아니라 생성자 인자로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{Authenticate, AuthUseCase};
//!
//! let outcome = use_case.authenticate(&email, &password).await?;
//! ```

pub mod auth;
