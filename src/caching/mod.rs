//! 폐기 저장소 계층
//!
//! 인증 코어는 TTL이 있는 키-값 저장소를 [`RevocationStore`] 인터페이스로만 사용합니다.
//!
//! - [`redis::RedisClient`]: 운영용 Redis 구현 (`SET EX` / `GET` / `DEL`)
//! - [`memory::MemoryRevocationStore`]: 프로세스 메모리 구현 (테스트, Redis 없는 로컬 실행)
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! REVOCATION_STORE=redis            # redis | memory
//! ```

pub mod revocation_store;
pub mod redis;
pub mod memory;

pub use revocation_store::RevocationStore;
pub use self::redis::RedisClient;
pub use memory::MemoryRevocationStore;
