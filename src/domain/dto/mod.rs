//! # Data Transfer Objects
//!
//! HTTP 계층과 로그인 라우터 사이에서 오가는 요청/응답 본문입니다.
//! 프레임워크(actix-web)에 의존하지 않는 형태로 정의하여
//! 라우터를 HTTP 서버 없이도 테스트할 수 있게 합니다.

pub mod auth;

pub use auth::*;
