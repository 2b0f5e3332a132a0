//! # Middlewares Module
//!
//! 모든 라우트에 공통으로 적용되는 미들웨어 구성입니다.
//!
//! - [`configure_cors`] - 모든 Origin/Method/Header 허용, `*` 응답
//! - [`json_content_type`] - `Content-Type`이 없으면 `application/json`으로 지정
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(configure_cors())
//!     .wrap(json_content_type())
//!     .configure(configure_all_routes)
//! ```

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// CORS 설정을 구성합니다
///
/// 로그인 API는 어떤 도메인에서도 호출할 수 있도록 전부 허용합니다.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// 모든 응답의 기본 Content-Type을 JSON으로 지정합니다
///
/// 핸들러가 직접 Content-Type을 지정한 경우에는 덮어쓰지 않습니다.
pub fn json_content_type() -> DefaultHeaders {
    DefaultHeaders::new().add((header::CONTENT_TYPE, "application/json"))
}
