//! 로그인 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 로그인 라우터를 조립합니다.
//! MongoDB 연결을 설정하고 `POST /api/login` 엔드포인트를 제공합니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use login_service_backend::composers::{compose_login_router, register_defaults, register_user_store};
use login_service_backend::config::{RateLimitConfig, ServerConfig};
use login_service_backend::core::registry::ComponentRegistry;
use login_service_backend::db::Database;
use login_service_backend::handlers::LoginRouter;
use login_service_backend::middlewares::{configure_cors, json_content_type};
use login_service_backend::repositories::users::UserRepository;
use login_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 로그인 서비스 시작중...");

    // 데이터 스토어 초기화
    let database = initialize_data_store().await?;

    // 포트 구현체 등록 및 라우터 조립
    let router = compose_router(&database);

    info!("✅ 로그인 라우터가 성공적으로 조립되었습니다!");

    // HTTP 서버 시작
    start_http_server(web::Data::new(router)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, JSON Content-Type, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(router: web::Data<LoginRouter>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: POST http://{}/api/login", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(configure_cors())
            .wrap(json_content_type())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(router.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// # 로그인 라우터 상태 전이까지 확인
/// RUST_LOG=login_service_backend::handlers=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// # Errors
///
/// 연결 또는 ping 실패 시 `std::io::Error`로 변환해 서버 기동을 중단합니다.
async fn initialize_data_store() -> std::io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    Ok(database)
}

/// 레지스트리에 구현체를 등록하고 로그인 라우터를 조립합니다
fn compose_router(database: &Database) -> LoginRouter {
    let mut registry = ComponentRegistry::new();

    register_user_store(&mut registry, Arc::new(UserRepository::new(database)));
    register_defaults(&mut registry);

    info!("📦 등록된 구현체: {}개", registry.len());

    compose_login_router(&mut registry)
}
