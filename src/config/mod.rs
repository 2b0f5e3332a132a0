//! # Configuration Module
//!
//! 로그인 서비스의 설정을 환경 변수에서 읽어옵니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, Rate Limiting 설정
//! - [`auth_config`] - JWT 토큰 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="clean_node_api"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! `.env` 파일은 `main`에서 `PROFILE` 값에 따라 로드됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::str::FromStr;

/// 환경 변수 값을 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
pub(crate) fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
