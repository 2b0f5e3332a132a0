//! bcrypt 비밀번호 비교 서비스
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::services::auth::ports::PasswordComparer;

/// bcrypt 해시와 평문 비밀번호를 비교하는 [`PasswordComparer`] 구현체
#[derive(Debug, Default, Clone, Copy)]
pub struct BcryptPasswordComparer;

impl BcryptPasswordComparer {
    pub fn new() -> Self {
        Self
    }

    /// 평문 값과 해시를 비교합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingParam("value")` - 평문 값이 비어 있음
    /// * `AppError::MissingParam("hash")` - 해시가 비어 있음
    /// * `AppError::PasswordError` - 해시 형식이 잘못됨
    pub fn compare(&self, value: &str, hash: &str) -> AppResult<bool> {
        if value.is_empty() {
            return Err(AppError::missing("value"));
        }

        if hash.is_empty() {
            return Err(AppError::missing("hash"));
        }

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(value, hash)
            .map_err(|e| AppError::PasswordError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        Ok(is_valid)
    }
}

#[async_trait]
impl PasswordComparer for BcryptPasswordComparer {
    async fn matches(&self, plain: &str, hash: &str) -> AppResult<bool> {
        self.compare(plain, hash)
    }
}
