//! API 라우트 설정 모듈
//!
//! 로그인 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 로그인 라우터는 `web::Data<LoginRouter>`로 애플리케이션에 주입되어 있어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(login_router))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_login_routes(cfg);
}

/// 로그인 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/login` - 이메일/비밀번호 로그인
fn configure_login_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::auth::login)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "login_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "login_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
