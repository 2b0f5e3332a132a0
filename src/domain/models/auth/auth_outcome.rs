//! 인증 결과 모델
//!
//! "자격 증명이 맞지 않음"은 에러가 아니라 정상적인 결과입니다.
//! 시스템 장애는 `Err(AppError)`로, 인증 실패는 [`AuthOutcome::Unauthenticated`]로
//! 분리해서 전달합니다.
use std::fmt;
use serde::{Deserialize, Serialize};

/// 토큰 발급기가 만든 불투명한 액세스 토큰
///
/// 내부 구조를 해석하지 않으며, `Debug` 출력에서도 값을 가립니다.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(***)")
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 인증 유스케이스의 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// 사용자 확인, 비밀번호 일치, 토큰 발급까지 완료
    Authenticated(AccessToken),
    /// 사용자가 없거나 비밀번호가 다르거나 발급기가 토큰을 주지 않음
    Unauthenticated,
}

impl AuthOutcome {
    /// 발급기 결과를 인증 결과로 옮깁니다.
    ///
    /// `None`이나 빈 토큰은 전달할 토큰이 없으므로 미인증입니다.
    pub fn from_issued(token: Option<AccessToken>) -> Self {
        match token {
            Some(token) if !token.is_empty() => AuthOutcome::Authenticated(token),
            _ => AuthOutcome::Unauthenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_issued_token() {
        let outcome = AuthOutcome::from_issued(Some(AccessToken::new("valid_token")));

        assert_eq!(outcome, AuthOutcome::Authenticated(AccessToken::new("valid_token")));
    }

    #[test]
    fn test_outcome_from_missing_token() {
        let outcome = AuthOutcome::from_issued(None);

        assert_eq!(outcome, AuthOutcome::Unauthenticated);
    }

    #[test]
    fn test_outcome_from_empty_token() {
        let outcome = AuthOutcome::from_issued(Some(AccessToken::new("")));

        assert_eq!(outcome, AuthOutcome::Unauthenticated);
    }

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiJ9.payload.signature");

        assert_eq!(format!("{:?}", token), "AccessToken(***)");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"eyJhbGciOiJIUzI1NiJ9.payload.signature\"");
    }
}
