//! 사용자 엔티티 모듈
//!
//! MongoDB `users` 컬렉션 문서([`user::UserDocument`])와 인증 파이프라인이
//! 읽는 최소 정보([`user::UserRecord`])를 제공합니다.

pub mod user;

pub use user::*;
