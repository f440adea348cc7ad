//! # Authentication Configuration Module
//!
//! JWT 토큰 수명과 서명 키를 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_ACCESS_TOKEN_EXPIRATION="1800000"     # 액세스 토큰 수명 (ms)
//! export JWT_REFRESH_TOKEN_EXPIRATION="86400000"   # 리프레시 토큰 수명 (ms)
//! export JWT_SECRET_KEY="kVh4tD6YvLv87AT2PWZ2jLBSdt4hNp9eyF4sPX1lSQo="  # base64
//! ```
//!
//! 세 값 모두 필수이며, 누락되거나 형식이 잘못되면 서버가 시작되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let ttl = jwt_config.refresh_lifetime_secs();
//! ```

use std::env;
use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Duration;
use thiserror::Error;

pub const ACCESS_EXPIRATION_ENV: &str = "JWT_ACCESS_TOKEN_EXPIRATION";
pub const REFRESH_EXPIRATION_ENV: &str = "JWT_REFRESH_TOKEN_EXPIRATION";
pub const SECRET_KEY_ENV: &str = "JWT_SECRET_KEY";

/// 시작 시점의 설정 에러. 발생하면 서버는 기동되지 않습니다.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} is invalid: {1}")]
    Invalid(&'static str, String),
}

/// JWT 토큰 설정
///
/// 서명 키는 HS256 대칭 키로 사용되며, 로딩 시점에 base64 디코딩됩니다.
#[derive(Clone)]
pub struct JwtConfig {
    access_token_expiration_ms: i64,
    refresh_token_expiration_ms: i64,
    secret: Vec<u8>,
}

impl JwtConfig {
    /// 수명(ms)과 base64 인코딩된 서명 키로 설정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Invalid` - 수명이 0 이하이거나, 서명 키가 비어 있거나 base64가 아닌 경우
    pub fn new(
        access_token_expiration_ms: i64,
        refresh_token_expiration_ms: i64,
        secret_base64: &str,
    ) -> Result<Self, ConfigError> {
        if access_token_expiration_ms <= 0 {
            return Err(ConfigError::Invalid(ACCESS_EXPIRATION_ENV, "must be positive".to_string()));
        }
        if refresh_token_expiration_ms <= 0 {
            return Err(ConfigError::Invalid(REFRESH_EXPIRATION_ENV, "must be positive".to_string()));
        }

        let secret = STANDARD
            .decode(secret_base64.trim())
            .map_err(|e| ConfigError::Invalid(SECRET_KEY_ENV, e.to_string()))?;
        if secret.is_empty() {
            return Err(ConfigError::Invalid(SECRET_KEY_ENV, "empty key".to_string()));
        }

        Ok(Self {
            access_token_expiration_ms,
            refresh_token_expiration_ms,
            secret,
        })
    }

    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 필수 환경 변수 누락
    /// * `ConfigError::Invalid` - 숫자가 아닌 수명 또는 잘못된 서명 키
    pub fn from_env() -> Result<Self, ConfigError> {
        let access = required_millis(ACCESS_EXPIRATION_ENV)?;
        let refresh = required_millis(REFRESH_EXPIRATION_ENV)?;
        let secret = env::var(SECRET_KEY_ENV).map_err(|_| ConfigError::Missing(SECRET_KEY_ENV))?;

        Self::new(access, refresh, &secret)
    }

    pub fn access_lifetime(&self) -> Duration {
        Duration::milliseconds(self.access_token_expiration_ms)
    }

    pub fn refresh_lifetime(&self) -> Duration {
        Duration::milliseconds(self.refresh_token_expiration_ms)
    }

    /// 저장소 TTL로 쓰이는 리프레시 토큰 수명 (초, 최소 1)
    pub fn refresh_lifetime_secs(&self) -> u64 {
        (self.refresh_token_expiration_ms / 1000).max(1) as u64
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_token_expiration_ms", &self.access_token_expiration_ms)
            .field("refresh_token_expiration_ms", &self.refresh_token_expiration_ms)
            .field("secret", &"***")
            .finish()
    }
}

fn required_millis(key: &'static str) -> Result<i64, ConfigError> {
    env::var(key)
        .map_err(|_| ConfigError::Missing(key))?
        .trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::Invalid(key, e.to_string()))
}
