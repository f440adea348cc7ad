use std::sync::Arc;

use crate::caching::RevocationStore;
use crate::errors::AppResult;

const REFRESH_PREFIX: &str = "refresh:";
const REVOKED_PREFIX: &str = "revoked:";

pub fn refresh_key(subject: &str) -> String {
    format!("{}{}", REFRESH_PREFIX, subject)
}

pub fn revoked_key(subject: &str) -> String {
    format!("{}{}", REVOKED_PREFIX, subject)
}

/// 회원별 활성 리프레시 토큰과 로그아웃된 액세스 토큰을 관리합니다.
#[derive(Clone)]
pub struct TokenRepository {
    store: Arc<dyn RevocationStore>,
}

impl TokenRepository {
    pub fn new(store: Arc<dyn RevocationStore>) -> Self {
        Self { store }
    }

    /// 리프레시 토큰을 저장합니다. 기존 값은 덮어씁니다.
    pub async fn store_refresh_token(&self, subject: &str, refresh_token: &str, ttl_seconds: u64) -> AppResult<()> {
        self.store.put(&refresh_key(subject), refresh_token, ttl_seconds).await?;
        log::info!("Refresh token 저장 완료 - subject: {}, ttl: {}초", subject, ttl_seconds);
        Ok(())
    }

    pub async fn find_refresh_token(&self, subject: &str) -> AppResult<Option<String>> {
        self.store.get(&refresh_key(subject)).await
    }

    pub async fn delete_refresh_token(&self, subject: &str) -> AppResult<()> {
        self.store.delete(&refresh_key(subject)).await
    }

    /// 로그아웃된 액세스 토큰을 `ttl_seconds` 동안 폐기 목록에 올립니다.
    ///
    /// 호출자는 토큰이 더 이상 디코딩되지 않는 시점까지의 초를 넘깁니다.
    pub async fn revoke_access_token(&self, subject: &str, access_token: &str, ttl_seconds: u64) -> AppResult<()> {
        self.store.put(&revoked_key(subject), access_token, ttl_seconds).await?;
        log::info!("Access token 폐기 등록 - subject: {}, ttl: {}초", subject, ttl_seconds);
        Ok(())
    }

    /// `revoked:<subject>` 항목이 존재하고 비어 있지 않으면 true
    pub async fn is_revoked(&self, subject: &str) -> AppResult<bool> {
        let entry = self.store.get(&revoked_key(subject)).await?;
        Ok(entry.is_some_and(|value| !value.is_empty()))
    }
}
