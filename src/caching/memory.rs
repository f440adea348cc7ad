//! 프로세스 메모리 폐기 저장소
//!
//! 만료 판단은 주입된 [`Clock`] 기준입니다. 만료된 항목은 조회 시점과 쓰기 시점에 제거됩니다.
//! 인스턴스 간 공유가 되지 않으므로 운영 환경에서는 Redis를 사용합니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::caching::revocation_store::RevocationStore;
use crate::errors::{AppError, AppResult};
use crate::utils::clock::Clock;

struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

pub struct MemoryRevocationStore {
    entries: Mutex<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryRevocationStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::RedisError("memory store poisoned".to_string()))
    }

    /// 만료되지 않은 항목 수
    pub fn len(&self) -> usize {
        let now = self.clock.now();
        self.lock()
            .map(|entries| entries.values().filter(|e| e.expires_at > now).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AppResult<()> {
        let now = self.clock.now();
        let mut entries = self.lock()?;

        // 다시 조회되지 않는 키도 정리
        entries.retain(|_, entry| entry.expires_at > now);

        if ttl_seconds == 0 {
            entries.remove(key);
            return Ok(());
        }

        let ttl = Duration::try_seconds(i64::try_from(ttl_seconds).unwrap_or(i64::MAX)).unwrap_or(Duration::MAX);
        let expires_at = now
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let now = self.clock.now();
        let mut entries = self.lock()?;

        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::ManualClock;

    #[actix_web::test]
    async fn test_put_get_delete() {
        let store = MemoryRevocationStore::new(Arc::new(ManualClock::fixed()));

        store.put("refresh:alice", "token-1", 60).await.unwrap();
        assert_eq!(store.get("refresh:alice").await.unwrap().as_deref(), Some("token-1"));

        store.put("refresh:alice", "token-2", 60).await.unwrap();
        assert_eq!(store.get("refresh:alice").await.unwrap().as_deref(), Some("token-2"));

        store.delete("refresh:alice").await.unwrap();
        assert!(store.get("refresh:alice").await.unwrap().is_none());
        store.delete("refresh:alice").await.unwrap();
    }

    #[actix_web::test]
    async fn test_entry_expires_with_ttl() {
        let clock = Arc::new(ManualClock::fixed());
        let store = MemoryRevocationStore::new(clock.clone());

        store.put("revoked:alice", "access", 10).await.unwrap();

        clock.advance(Duration::seconds(9));
        assert!(store.get("revoked:alice").await.unwrap().is_some());

        clock.advance(Duration::seconds(1));
        assert!(store.get("revoked:alice").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_put_sweeps_expired_entries() {
        let clock = Arc::new(ManualClock::fixed());
        let store = MemoryRevocationStore::new(clock.clone());

        store.put("revoked:alice", "access-a", 5).await.unwrap();
        store.put("revoked:bob", "access-b", 5).await.unwrap();
        store.put("refresh:carol", "refresh-c", 5).await.unwrap();
        store.put("refresh:dave", "refresh-d", 60).await.unwrap();
        assert_eq!(store.entries.lock().unwrap().len(), 4);

        clock.advance(Duration::seconds(5));
        store.put("refresh:erin", "refresh-e", 60).await.unwrap();

        let entries = store.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains_key("refresh:dave"));
        assert!(entries.contains_key("refresh:erin"));
    }

    #[actix_web::test]
    async fn test_zero_ttl_removes_key() {
        let store = MemoryRevocationStore::new(Arc::new(ManualClock::fixed()));

        store.put("revoked:alice", "access", 10).await.unwrap();
        store.put("revoked:alice", "access", 0).await.unwrap();

        assert!(store.get("revoked:alice").await.unwrap().is_none());
    }
}
