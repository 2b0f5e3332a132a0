//! # Application Error Handling System
//!
//! 로그인 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 에러 메시지를 정의하고 `actix_web::ResponseError`로
//! HTTP 응답 변환 규칙을 한 곳에 모아둡니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `MissingParam` | 400 Bad Request | `{"error": "Missing param: <name>"}` |
//! | `InvalidParam` | 400 Bad Request | `{"error": "Invalid param: <name>"}` |
//! | `Unauthorized` | 401 Unauthorized | `{"error": "Unauthorized"}` |
//! | `DatabaseError` | 500 Internal Server Error | `{"error": "Internal server error"}` |
//! | `PasswordError` | 500 Internal Server Error | `{"error": "Internal server error"}` |
//! | `TokenError` | 500 Internal Server Error | `{"error": "Internal server error"}` |
//! | `InternalError` | 500 Internal Server Error | `{"error": "Internal server error"}` |
//!
//! 500 계열 에러의 상세 메시지는 로그에만 남고 클라이언트에게는 절대 노출되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn require_email(email: &str) -> AppResult<&str> {
//!     if email.is_empty() {
//!         return Err(AppError::MissingParam("email".to_string()));
//!     }
//!     Ok(email)
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 클라이언트에게 노출되는 유일한 서버 에러 메시지
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 필수 값(요청 필드 또는 협력 객체)이 없음
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 값은 있지만 형식이 잘못되었거나 필요한 기능을 제공하지 않음
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// 자격 증명 불일치
    #[error("Unauthorized")]
    Unauthorized,

    /// 사용자 저장소 장애
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 비교 실패 (잘못된 해시 등)
    #[error("Password error: {0}")]
    PasswordError(String),

    /// 토큰 서명 실패
    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `MissingParam` 생성 헬퍼
    pub fn missing(name: &str) -> Self {
        AppError::MissingParam(name.to_string())
    }

    /// `InvalidParam` 생성 헬퍼
    pub fn invalid(name: &str) -> Self {
        AppError::InvalidParam(name.to_string())
    }

    /// 클라이언트에게 전달해도 되는 메시지를 반환합니다.
    ///
    /// 서버 내부 에러는 상세 내용을 숨기고 고정 문구로 대체합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MissingParam(_) | AppError::InvalidParam(_) | AppError::Unauthorized => {
                self.to_string()
            }
            _ => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParam(_) | AppError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
