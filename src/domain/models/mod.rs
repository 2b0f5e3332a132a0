//! # Domain Models
//!
//! 요청 하나를 처리하는 동안만 존재하는 인증 모델입니다.
//! 저장소에 영속화되지 않으며, 요청이 끝나면 함께 사라집니다.

pub mod auth;

pub use auth::*;
