//! 범용 유틸리티 모듈
//!
//! - [`email_validator`] - 이메일 형식 검증

pub mod email_validator;

pub use email_validator::*;
