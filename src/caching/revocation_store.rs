use async_trait::async_trait;

use crate::errors::AppResult;

/// TTL을 지원하는 키-값 저장소
///
/// 여러 키에 걸친 원자성은 가정하지 않습니다. 같은 세션의 연속된 요청 사이에서
/// 쓰기가 다음 읽기 전에 보이기만 하면 됩니다. I/O 실패는 재시도 없이
/// `AppError::RedisError`로 반환합니다.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// `ttl_seconds` 후 만료되는 값을 저장합니다. 기존 값은 덮어씁니다.
    /// TTL이 0이면 즉시 만료된 것으로 보고 키를 지웁니다.
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AppResult<()>;

    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 없는 키를 지워도 성공입니다.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
