//! JWT 액세스 토큰 발급 서비스
//!
//! HMAC-SHA256으로 서명한 JSON Web Token을 발급하는 [`TokenIssuer`] 구현체입니다.
//! 발급만 담당하며 토큰 검증이나 갱신은 하지 않습니다.

use chrono::{Duration, Utc};
use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::AccessToken;
use crate::services::auth::ports::TokenIssuer;

/// 액세스 토큰 클레임
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 발급 서비스
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// 환경 설정(`JWT_SECRET`, `JWT_EXPIRATION_HOURS`)으로 서비스를 만듭니다.
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 사용자 ID로 액세스 토큰을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingParam("secret")` - 서명 비밀키가 비어 있음
    /// * `AppError::MissingParam("id")` - 사용자 ID가 비어 있음
    /// * `AppError::TokenError` - 서명 실패
    pub fn generate_access_token(&self, user_id: &str) -> AppResult<AccessToken> {
        if self.secret.is_empty() {
            return Err(AppError::missing("secret"));
        }

        if user_id.is_empty() {
            return Err(AppError::missing("id"));
        }

        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map(AccessToken::new)
            .map_err(|e| AppError::TokenError(format!("JWT 토큰 생성 실패: {}", e)))
    }
}

#[async_trait]
impl TokenIssuer for TokenService {
    async fn issue(&self, user_id: &str) -> AppResult<Option<AccessToken>> {
        self.generate_access_token(user_id).map(Some)
    }
}
