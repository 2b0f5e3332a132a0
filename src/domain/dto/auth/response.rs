//! 로그인 응답 DTO
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, SERVER_ERROR_MESSAGE};
use crate::domain::models::auth::AccessToken;

/// 응답 본문: `{ "accessToken": ... }` 또는 `{ "error": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoginResponseBody {
    Token {
        #[serde(rename = "accessToken")]
        access_token: String,
    },
    Error {
        error: String,
    },
}

/// 라우터가 요청마다 한 번 만드는 응답
///
/// 생성 후에는 변경하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub status_code: StatusCode,
    pub body: LoginResponseBody,
}

impl LoginResponse {
    /// 200 OK `{ accessToken }`
    pub fn ok(token: AccessToken) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: LoginResponseBody::Token {
                access_token: token.into_inner(),
            },
        }
    }

    /// 400 Bad Request, 클라이언트 입력 에러 메시지를 그대로 전달
    pub fn bad_request(error: &AppError) -> Self {
        Self::error(StatusCode::BAD_REQUEST, error.to_string())
    }

    /// 401 Unauthorized
    pub fn unauthorized() -> Self {
        Self::error(StatusCode::UNAUTHORIZED, AppError::Unauthorized.to_string())
    }

    /// 500 Internal Server Error, 상세 내용 없음
    pub fn server_error() -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE.to_string())
    }

    fn error(status_code: StatusCode, error: String) -> Self {
        Self {
            status_code,
            body: LoginResponseBody::Error { error },
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        match &self.body {
            LoginResponseBody::Token { access_token } => Some(access_token),
            LoginResponseBody::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            LoginResponseBody::Error { error } => Some(error),
            LoginResponseBody::Token { .. } => None,
        }
    }
}

impl actix_web::Responder for LoginResponse {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> actix_web::HttpResponse<Self::Body> {
        actix_web::HttpResponse::build(self.status_code).json(self.body)
    }
}
