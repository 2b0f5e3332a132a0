//! # Component Registry - 이름 기반 협력 객체 주입
//!
//! 로그인 파이프라인의 협력 객체(포트 구현체)를 이름으로 등록하고 꺼내 쓰는
//! 레지스트리입니다. 전역 상태가 아닌 일반 값이므로 조립 시점에 만들어 쓰고
//! 버리면 됩니다.
//!
//! ## 정적 주입과의 관계
//!
//! 타입이 정해진 생성자(`AuthUseCase::new`)로 주입하면 모든 의존성이 컴파일 타임에
//! 보장됩니다. 레지스트리는 플러그인처럼 런타임에 조립되는 경우를 위한 경계이며,
//! 조회 결과를 [`Dependency`]로 돌려줍니다.
//!
//! ```text
//! register("userLookup", Arc<dyn UserLookup>)
//!          │
//!          ▼
//! resolve::<Arc<dyn UserLookup>>("userLookup")
//!   ├─ 등록 안 됨          → Dependency::Missing
//!   ├─ 다른 타입으로 등록됨 → Dependency::Invalid
//!   └─ 일치                → Dependency::Wired(value)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let mut registry = ComponentRegistry::new();
//! registry.register::<Arc<dyn UserLookup>>(components::USER_LOOKUP, Arc::new(repo));
//!
//! let use_case = AuthUseCase::from_registry(&registry);
//! ```

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};

/// 레지스트리에 사용되는 컴포넌트 이름
///
/// 에러 메시지(`Missing param: userLookup`)에도 그대로 쓰입니다.
pub mod components {
    pub const USER_LOOKUP: &str = "userLookup";
    pub const PASSWORD_COMPARER: &str = "passwordComparer";
    pub const TOKEN_ISSUER: &str = "tokenIssuer";
    pub const ACCESS_TOKEN_RECORDER: &str = "accessTokenRecorder";
    pub const EMAIL_VALIDATOR: &str = "emailValidator";
    pub const AUTH_USE_CASE: &str = "authUseCase";
}

/// 협력 객체 조회 결과
///
/// 런타임 조립 경계에서 "없음"과 "있지만 쓸 수 없음"을 구분합니다.
#[derive(Clone)]
pub enum Dependency<T> {
    /// 요구하는 기능을 제공하는 객체가 연결됨
    Wired(T),
    /// 등록되지 않음
    Missing,
    /// 등록되었지만 요구하는 기능(포트)을 제공하지 않음
    Invalid,
}

impl<T> Dependency<T> {
    /// 연결된 객체를 빌려오거나, 없으면 이름이 담긴 파라미터 에러를 반환합니다.
    ///
    /// * `Missing` → `AppError::MissingParam(name)`
    /// * `Invalid` → `AppError::InvalidParam(name)`
    pub fn require(&self, name: &str) -> AppResult<&T> {
        match self {
            Dependency::Wired(value) => Ok(value),
            Dependency::Missing => Err(AppError::missing(name)),
            Dependency::Invalid => Err(AppError::invalid(name)),
        }
    }

    /// 선택적 의존성을 꺼냅니다.
    ///
    /// 등록되지 않은 경우는 `None`이지만, 등록은 되었는데 요구하는 기능을 제공하지
    /// 않으면 배선 오류이므로 `AppError::InvalidParam(name)`을 반환합니다.
    pub fn optional(&self, name: &str) -> AppResult<Option<&T>> {
        match self {
            Dependency::Wired(value) => Ok(Some(value)),
            Dependency::Missing => Ok(None),
            Dependency::Invalid => Err(AppError::invalid(name)),
        }
    }
}

impl<T> fmt::Debug for Dependency<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::Wired(_) => write!(f, "Wired({})", type_name::<T>()),
            Dependency::Missing => write!(f, "Missing"),
            Dependency::Invalid => write!(f, "Invalid"),
        }
    }
}

/// 이름으로 협력 객체를 보관하는 레지스트리
#[derive(Default)]
pub struct ComponentRegistry {
    instances: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컴포넌트를 등록합니다. 같은 이름이 있으면 교체합니다.
    ///
    /// 포트 구현체는 보통 `Arc<dyn Port>` 형태로 등록합니다.
    pub fn register<T: Any + Send + Sync>(&mut self, name: &str, component: T) -> &mut Self {
        log::debug!("컴포넌트 등록: {} ({})", name, type_name::<T>());
        self.instances.insert(name.to_string(), Arc::new(component));
        self
    }

    /// 등록된 컴포넌트를 요구하는 타입으로 꺼냅니다.
    pub fn resolve<T: Any + Clone>(&self, name: &str) -> Dependency<T> {
        match self.instances.get(name) {
            None => {
                log::warn!("컴포넌트가 등록되지 않았습니다: {}", name);
                Dependency::Missing
            }
            Some(instance) => match instance.downcast_ref::<T>() {
                Some(value) => Dependency::Wired(value.clone()),
                None => {
                    log::warn!(
                        "컴포넌트 '{}'가 요구 타입 {}을(를) 제공하지 않습니다",
                        name,
                        type_name::<T>()
                    );
                    Dependency::Invalid
                }
            },
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
