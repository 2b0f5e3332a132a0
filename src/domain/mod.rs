//! # Domain Layer
//!
//! 로그인 파이프라인이 주고받는 데이터 구조를 정의합니다.
//!
//! - [`entities`] - 사용자 저장소에 영속화되는 문서와 읽기 전용 레코드
//! - [`models`] - 액세스 토큰, 인증 결과 등 요청 단위 모델
//! - [`dto`] - HTTP 요청/응답 본문

pub mod entities;
pub mod dto;
pub mod models;

pub use dto::auth::{LoginBody, LoginRequest, LoginResponse};
pub use entities::users::{UserDocument, UserRecord};
pub use models::auth::{AccessToken, AuthOutcome};
