use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// `users` 컬렉션에 저장된 사용자 문서
///
/// 로그인에 필요한 필드만 매핑합니다. 조회 시 `{ _id, password }`만
/// 프로젝션하므로 나머지 필드는 모두 선택 사항입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// bcrypt 해시
    pub password: String,
    #[serde(rename = "accessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl UserDocument {
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

/// 인증 파이프라인이 읽는 사용자 정보
///
/// 저장소가 소유하며 파이프라인은 읽기만 합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub password_hash: String,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl From<UserDocument> for UserRecord {
    fn from(document: UserDocument) -> Self {
        Self {
            id: document.id_string(),
            password_hash: document.password,
        }
    }
}
