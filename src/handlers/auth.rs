//! Authentication HTTP Handlers
//!
//! 로그인 라우터를 actix-web 엔드포인트에 연결합니다.
//!
//! # Endpoint
//!
//! - `POST /api/login` - 이메일/비밀번호 로그인
use actix_web::{post, web};
use crate::domain::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::login_router::LoginRouter;

/// 로컬 로그인 핸들러
///
/// 본문을 원본 바이트로 받아 [`LoginRequest`]로 읽습니다. JSON이 아니거나 비어 있으면
/// 본문이 없는 요청으로 간주되어 라우터가 500을 반환합니다.
///
/// 크기 제한 초과 등으로 본문을 읽지 못한 경우에도 추출기 에러를 그대로 내보내지 않고
/// 라우터에 요청 없음으로 넘겨 같은 500 JSON 응답을 만듭니다.
///
/// # Endpoint
/// `POST /api/login`
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
/// ```
#[post("/login")]
pub async fn login(
    router: web::Data<LoginRouter>,
    payload: Result<web::Bytes, actix_web::Error>,
) -> LoginResponse {
    match payload {
        Ok(payload) => {
            let request = LoginRequest::from_bytes(&payload);
            router.handle(Some(&request)).await
        }
        Err(e) => {
            log::warn!("로그인 요청 본문을 읽지 못했습니다: {}", e);
            router.handle(None).await
        }
    }
}
