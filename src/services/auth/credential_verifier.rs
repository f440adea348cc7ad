use async_trait::async_trait;

use crate::domain::models::auth::Principal;
use crate::errors::AppResult;

/// 로그인 자격 증명 검증
///
/// 구현체는 존재하지 않는 회원과 비밀번호 불일치를 모두
/// `AppError::BadCredentials` 하나로 반환해야 합니다.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Principal>;
}
