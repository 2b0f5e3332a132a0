//! 테스트용 spy 협력 객체
//!
//! 각 spy는 받은 인자를 기록하고, 미리 정해둔 값 또는 에러를 돌려줍니다.
use std::sync::Mutex;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::UserRecord;
use crate::domain::models::auth::{AccessToken, AuthOutcome};
use crate::services::auth::ports::{
    AccessTokenRecorder, Authenticate, EmailFormatValidator, PasswordComparer, TokenIssuer,
    UserLookup,
};

pub struct UserLookupSpy {
    result: AppResult<Option<UserRecord>>,
    emails: Mutex<Vec<String>>,
}

impl UserLookupSpy {
    pub fn returning(user: Option<UserRecord>) -> Self {
        Self { result: Ok(user), emails: Mutex::new(Vec::new()) }
    }

    pub fn failing(error: AppError) -> Self {
        Self { result: Err(error), emails: Mutex::new(Vec::new()) }
    }

    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserLookup for UserLookupSpy {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        self.emails.lock().unwrap().push(email.to_string());
        self.result.clone()
    }
}

pub struct PasswordComparerSpy {
    result: AppResult<bool>,
    calls: Mutex<Vec<(String, String)>>,
}

impl PasswordComparerSpy {
    pub fn returning(is_valid: bool) -> Self {
        Self { result: Ok(is_valid), calls: Mutex::new(Vec::new()) }
    }

    pub fn failing(error: AppError) -> Self {
        Self { result: Err(error), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PasswordComparer for PasswordComparerSpy {
    async fn matches(&self, plain: &str, hash: &str) -> AppResult<bool> {
        self.calls.lock().unwrap().push((plain.to_string(), hash.to_string()));
        self.result.clone()
    }
}

pub struct TokenIssuerSpy {
    result: AppResult<Option<AccessToken>>,
    user_ids: Mutex<Vec<String>>,
}

impl TokenIssuerSpy {
    pub fn returning(token: Option<&str>) -> Self {
        Self {
            result: Ok(token.map(AccessToken::new)),
            user_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self { result: Err(error), user_ids: Mutex::new(Vec::new()) }
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.user_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenIssuer for TokenIssuerSpy {
    async fn issue(&self, user_id: &str) -> AppResult<Option<AccessToken>> {
        self.user_ids.lock().unwrap().push(user_id.to_string());
        self.result.clone()
    }
}

pub struct AccessTokenRecorderSpy {
    result: AppResult<()>,
    calls: Mutex<Vec<(String, String)>>,
}

impl AccessTokenRecorderSpy {
    pub fn new() -> Self {
        Self { result: Ok(()), calls: Mutex::new(Vec::new()) }
    }

    pub fn failing(error: AppError) -> Self {
        Self { result: Err(error), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccessTokenRecorder for AccessTokenRecorderSpy {
    async fn record(&self, user_id: &str, token: &AccessToken) -> AppResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((user_id.to_string(), token.as_str().to_string()));
        self.result.clone()
    }
}

pub struct EmailValidatorSpy {
    result: AppResult<bool>,
    emails: Mutex<Vec<String>>,
}

impl EmailValidatorSpy {
    pub fn returning(is_valid: bool) -> Self {
        Self { result: Ok(is_valid), emails: Mutex::new(Vec::new()) }
    }

    pub fn failing(error: AppError) -> Self {
        Self { result: Err(error), emails: Mutex::new(Vec::new()) }
    }

    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailFormatValidator for EmailValidatorSpy {
    async fn is_valid(&self, email: &str) -> AppResult<bool> {
        self.emails.lock().unwrap().push(email.to_string());
        self.result.clone()
    }
}

pub struct AuthenticateSpy {
    result: AppResult<AuthOutcome>,
    calls: Mutex<Vec<(String, String)>>,
}

impl AuthenticateSpy {
    pub fn returning(token: Option<&str>) -> Self {
        Self {
            result: Ok(AuthOutcome::from_issued(token.map(AccessToken::new))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self { result: Err(error), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Authenticate for AuthenticateSpy {
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        self.result.clone()
    }
}
