//! 로그인 요청 DTO
//!
//! 클라이언트가 보낸 본문을 관대하게 읽습니다. 필드가 없거나 문자열이 아니면
//! 에러 대신 `None`으로 남겨 두고, 어떤 필드가 문제인지는 라우터가 판단합니다.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 로그인 요청 본문 `{ "email": ..., "password": ... }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginBody {
    pub fn new(email: Option<&str>, password: Option<&str>) -> Self {
        Self {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    /// JSON 객체에서 문자열 필드만 추출합니다.
    ///
    /// 객체가 아닌 값이면 `None`을 반환합니다.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |name: &str| object.get(name).and_then(Value::as_str).map(str::to_string);

        Some(Self {
            email: field("email"),
            password: field("password"),
        })
    }

    /// 비어 있지 않은 이메일
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    /// 비어 있지 않은 비밀번호
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|password| !password.is_empty())
    }
}

/// 라우터로 전달되는 요청
///
/// 본문이 없거나 JSON 객체로 읽을 수 없으면 `body`가 `None`입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub body: Option<LoginBody>,
}

impl LoginRequest {
    pub fn with_body(body: LoginBody) -> Self {
        Self { body: Some(body) }
    }

    /// 원본 요청 바이트에서 요청을 만듭니다.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let body = serde_json::from_slice::<Value>(bytes)
            .ok()
            .and_then(|value| LoginBody::from_json(&value));

        Self { body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_reads_both_fields() {
        let request = LoginRequest::from_bytes(br#"{"email":"any_email@email.com","password":"any_password"}"#);
        let body = request.body.unwrap();

        assert_eq!(body.email(), Some("any_email@email.com"));
        assert_eq!(body.password(), Some("any_password"));
    }

    #[test]
    fn test_from_bytes_without_json_has_no_body() {
        assert_eq!(LoginRequest::from_bytes(b"").body, None);
        assert_eq!(LoginRequest::from_bytes(b"email=a@b.com").body, None);
        assert_eq!(LoginRequest::from_bytes(b"[1, 2]").body, None);
    }

    #[test]
    fn test_empty_and_non_string_fields_count_as_absent() {
        let body = LoginRequest::from_bytes(br#"{"email":"","password":42}"#)
            .body
            .unwrap();

        assert_eq!(body.email(), None);
        assert_eq!(body.password(), None);
    }
}
