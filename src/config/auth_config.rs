//! # Authentication Configuration Module
//!
//! 액세스 토큰 서명에 필요한 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//! ```

use std::env;
use super::parse_or;

pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 비밀키 (`JWT_SECRET`)
    ///
    /// 설정되지 않은 경우 개발용 기본값을 사용하며 경고를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰 유효 시간 (`JWT_EXPIRATION_HOURS`, 기본 24시간)
    pub fn expiration_hours() -> i64 {
        parse_or(env::var("JWT_EXPIRATION_HOURS").ok(), 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_hours_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_secret_is_never_empty_by_default() {
        if env::var("JWT_SECRET").is_err() {
            assert!(!JwtConfig::secret().is_empty());
        }
    }
}
