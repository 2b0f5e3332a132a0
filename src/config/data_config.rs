//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, HTTP 서버, Rate Limiting 관련 설정을 관리합니다.

use std::env;
use super::parse_or;

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// `MONGODB_URI` (기본값: `mongodb://localhost:27017`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// `DATABASE_NAME` (기본값: `clean_node_api`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "clean_node_api".to_string())
    }

    /// `USERS_COLLECTION` (기본값: `users`)
    pub fn users_collection() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string())
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_or(env::var("PORT").ok(), 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수 (`SERVER_WORKERS`, 기본 4)
    pub fn workers() -> usize {
        parse_or(env::var("SERVER_WORKERS").ok(), 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let config = Self {
            per_second: parse_or(env::var("RATE_LIMIT_PER_SECOND").ok(), 100),
            burst_size: parse_or(env::var("RATE_LIMIT_BURST_SIZE").ok(), 200),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}
