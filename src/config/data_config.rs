//! 실행 환경 및 인프라 설정 관리 모듈
//!
//! 서버 바인딩, 패스워드 해싱, Redis 폐기 저장소 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT`를 우선 확인하고, 없으면 `.env` 파일 선택에 쓰이는 `PROFILE`을 사용합니다.
    /// 둘 다 없으면 `Production`입니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("PROFILE"))
            .map(|s| Self::from_str(&s))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// # Returns
    ///
    /// 4-15 범위의 bcrypt cost 값
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `env` - 대상 환경
    ///
    /// # Returns
    ///
    /// 해당 환경에 최적화된 bcrypt cost 값
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port`
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 폐기 저장소 구현 선택
#[derive(Debug, Clone, PartialEq)]
pub enum RevocationStoreKind {
    /// Redis (`SET EX` / `GET` / `DEL`)
    Redis,
    /// 프로세스 메모리. 로컬 개발 전용이며 인스턴스 간에 공유되지 않습니다.
    Memory,
}

impl RevocationStoreKind {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => RevocationStoreKind::Memory,
            _ => RevocationStoreKind::Redis,
        }
    }
}

/// Redis 연결 설정
pub struct RedisConfig;

impl RedisConfig {
    /// Redis 접속 URL. 기본값: `redis://localhost:6379`
    ///
    /// # Environment Variables
    ///
    /// - `REDIS_URL`
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 사용할 폐기 저장소. 기본값: Redis
    ///
    /// # Environment Variables
    ///
    /// - `REVOCATION_STORE`: `redis` | `memory`
    pub fn store_kind() -> RevocationStoreKind {
        env::var("REVOCATION_STORE")
            .map(|s| RevocationStoreKind::from_str(&s))
            .unwrap_or(RevocationStoreKind::Redis)
    }
}
