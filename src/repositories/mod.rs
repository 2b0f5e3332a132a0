//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 사용자 저장소로 사용하며, 리포지토리는 로그인 파이프라인의
//! 포트(`UserLookup`, `AccessTokenRecorder`)를 구현합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(&database);
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
