//! # Core Module
//!
//! 로그인 서비스 전체가 공유하는 기반 구성 요소입니다.
//!
//! - [`errors`] - `AppError` 에러 분류와 HTTP 응답 매핑
//! - [`registry`] - 이름 기반 협력 객체 레지스트리와 `Dependency` 조회 결과

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
