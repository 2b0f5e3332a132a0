//! 이메일 형식 검증기
//!
//! `validator` 크레이트의 HTML5 이메일 규칙을 그대로 사용합니다.
use async_trait::async_trait;
use validator::ValidateEmail;
use crate::core::errors::AppResult;
use crate::services::auth::ports::EmailFormatValidator;

/// `validator::ValidateEmail`에 위임하는 [`EmailFormatValidator`] 구현체
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, email: &str) -> bool {
        email.validate_email()
    }
}

#[async_trait]
impl EmailFormatValidator for EmailValidator {
    async fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(self.check(email))
    }
}
