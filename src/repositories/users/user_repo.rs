//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 로그인 파이프라인의 [`UserLookup`]과 [`AccessTokenRecorder`] 포트를 구현합니다.
//!
//! ## 특징
//!
//! - **최소 조회**: 로그인에 필요한 `_id`, `password`만 프로젝션
//! - **읽기 위주**: 사용자 생성/삭제는 이 서비스의 책임이 아님
//! - **토큰 기록**: 마지막으로 발급한 액세스 토큰을 `accessToken` 필드에 저장

use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, Collection};
use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{UserDocument, UserRecord};
use crate::domain::models::auth::AccessToken;
use crate::services::auth::ports::{AccessTokenRecorder, UserLookup};

pub struct UserRepository {
    collection: Collection<UserDocument>,
}

impl UserRepository {
    /// 설정된 사용자 컬렉션(`USERS_COLLECTION`)으로 리포지토리를 만듭니다.
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, &DatabaseConfig::users_collection())
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.get_database().collection::<UserDocument>(collection_name),
        }
    }

    /// 이메일로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingParam("email")` - 이메일이 비어 있음
    /// * `AppError::DatabaseError` - 저장소 장애
    pub async fn load(&self, email: &str) -> AppResult<Option<UserDocument>> {
        if email.is_empty() {
            return Err(AppError::missing("email"));
        }

        self.collection
            .find_one(doc! { "email": email })
            .projection(doc! { "password": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자 문서의 `accessToken` 필드를 갱신합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingParam("userId")` / `AppError::MissingParam("accessToken")`
    /// * `AppError::InvalidParam("userId")` - ObjectId 형식이 아님
    /// * `AppError::DatabaseError` - 저장소 장애
    pub async fn update_access_token(&self, user_id: &str, access_token: &str) -> AppResult<()> {
        let object_id = parse_user_id(user_id)?;

        if access_token.is_empty() {
            return Err(AppError::missing("accessToken"));
        }

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "accessToken": access_token } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            log::warn!("액세스 토큰을 기록할 사용자가 없습니다: {}", user_id);
        }

        Ok(())
    }
}

/// 사용자 ID 문자열을 ObjectId로 변환합니다.
fn parse_user_id(user_id: &str) -> AppResult<ObjectId> {
    if user_id.is_empty() {
        return Err(AppError::missing("userId"));
    }

    ObjectId::parse_str(user_id).map_err(|_| AppError::invalid("userId"))
}

#[async_trait]
impl UserLookup for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.load(email).await?.map(UserRecord::from))
    }
}

#[async_trait]
impl AccessTokenRecorder for UserRepository {
    async fn record(&self, user_id: &str, token: &AccessToken) -> AppResult<()> {
        self.update_access_token(user_id, token.as_str()).await
    }
}
