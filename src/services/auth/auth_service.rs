//! 인증 파이프라인과 로그인/재발급/로그아웃 흐름
//!
//! ## 요청별 파이프라인
//!
//! ```text
//! NoToken ─► TokenPresent ─► {Valid, Invalid} ─► {Revoked, Active} ─► {Authenticated, Anonymous}
//! ```
//!
//! 1. Authorization 헤더 없음 → `Anonymous(NoToken)`
//! 2. 접두사 제거 및 액세스 토큰 검증 실패 → 사유 로그 → `Anonymous(InvalidToken)`
//! 3. `revoked:<subject>`가 존재하고 비어 있지 않음 → `Anonymous(Revoked)`
//! 4. 그 외 → `Authenticated(Principal)`
//!
//! 검증 실패는 익명 처리로 끝나고, 저장소 I/O 실패만 에러로 반환됩니다.
//!
//! ## 동시성
//!
//! 같은 회원의 재발급과 로그아웃이 동시에 실행되면 `refresh:<subject>`는
//! 마지막 쓰기가 남습니다. 잠금은 두지 않습니다.

use std::sync::Arc;

use crate::domain::models::auth::{AnonymousReason, Authentication};
use crate::domain::models::token::{TokenKind, TokenPair};
use crate::errors::{AppError, AppResult, TokenError};
use crate::repositories::tokens::TokenRepository;
use crate::services::auth::credential_verifier::CredentialVerifier;
use crate::services::auth::token_codec::{log_failure, TokenCodec};
use crate::services::auth::token_issuer::TokenIssuer;

pub struct AuthService {
    issuer: TokenIssuer,
    tokens: TokenRepository,
    credentials: Arc<dyn CredentialVerifier>,
}

impl AuthService {
    pub fn new(
        codec: Arc<TokenCodec>,
        tokens: TokenRepository,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            issuer: TokenIssuer::new(codec),
            tokens,
            credentials,
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        self.issuer.codec()
    }

    /// 요청의 Authorization 헤더 값으로 인증 결과를 결정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::RedisError` - 폐기 목록 조회 실패
    pub async fn authenticate(&self, authorization: Option<&str>) -> AppResult<Authentication> {
        let Some(header) = authorization else {
            return Ok(Authentication::Anonymous(AnonymousReason::NoToken));
        };

        let claims = match TokenCodec::strip_scheme(header)
            .and_then(|token| self.codec().decode_kind(token, TokenKind::Access))
        {
            Ok(claims) => claims,
            Err(e) => {
                log_failure(&e);
                return Ok(Authentication::Anonymous(AnonymousReason::InvalidToken));
            }
        };

        if self.tokens.is_revoked(&claims.sub).await? {
            log::info!("로그아웃된 토큰 - subject: {}", claims.sub);
            return Ok(Authentication::Anonymous(AnonymousReason::Revoked));
        }

        Ok(Authentication::Authenticated(claims.principal()))
    }

    /// 자격 증명을 검증하고 토큰 쌍을 발급합니다.
    ///
    /// 리프레시 토큰은 `refresh:<username>`에 리프레시 토큰 수명만큼 저장됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadCredentials` - 회원이 없거나 비밀번호 불일치 (구분하지 않음)
    /// * `AppError::RedisError` - 리프레시 토큰 저장 실패
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenPair> {
        let principal = self.credentials.authenticate(username, password).await.map_err(|e| {
            log::info!("로그인 인증 실패 - username: {}", username);
            e
        })?;

        let pair = self.issuer.issue_pair(&principal.subject, principal.role)?;
        self.tokens
            .store_refresh_token(&principal.subject, &pair.refresh_token, self.refresh_ttl())
            .await?;

        log::info!("로그인 인증 성공 - username: {}", principal.subject);
        Ok(pair)
    }

    /// 쿠키의 리프레시 토큰(`Bearer <token>`)으로 새 토큰 쌍을 발급하고 저장된 값을 교체합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRefreshToken` - 쿠키 없음, 검증 실패, 저장된 값 없음 또는 불일치
    /// * `AppError::RedisError` - 저장소 I/O 실패
    pub async fn refresh(&self, presented: Option<&str>) -> AppResult<TokenPair> {
        let value = presented.ok_or(AppError::InvalidRefreshToken)?;
        let invalid = |e: TokenError| {
            log_failure(&e);
            AppError::InvalidRefreshToken
        };

        let token = TokenCodec::strip_scheme(value).map_err(invalid)?;
        let claims = self.codec().decode_kind(token, TokenKind::Refresh).map_err(invalid)?;

        let stored = self.tokens.find_refresh_token(&claims.sub).await?;
        if stored.as_deref() != Some(token) {
            log::warn!("저장된 리프레시 토큰과 불일치 - subject: {}", claims.sub);
            return Err(AppError::InvalidRefreshToken);
        }

        let pair = self.issuer.issue_pair(&claims.sub, claims.auth)?;
        self.tokens
            .store_refresh_token(&claims.sub, &pair.refresh_token, self.refresh_ttl())
            .await?;

        log::info!("토큰 재발급 완료 - subject: {}", claims.sub);
        Ok(pair)
    }

    /// 리프레시 토큰을 삭제하고 액세스 토큰을 남은 수명 동안 폐기 목록에 올립니다.
    ///
    /// 코덱은 `now <= exp`인 동안 토큰을 받아들이므로, 폐기 항목은 디코딩이 처음 실패하는
    /// `exp + 1`초까지 유지됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingToken` - Authorization 헤더 없음
    /// * `AppError::InvalidToken` - 접두사 누락 또는 유효하지 않은 액세스 토큰
    /// * `AppError::RedisError` - 저장소 I/O 실패
    pub async fn logout(&self, authorization: Option<&str>) -> AppResult<()> {
        let header = authorization.ok_or(AppError::MissingToken)?;

        let token = TokenCodec::strip_scheme(header)?;
        let claims = self.codec().decode_kind(token, TokenKind::Access).map_err(|e| {
            log_failure(&e);
            AppError::InvalidToken(e)
        })?;

        let ttl = (claims.exp + 1 - self.codec().now().timestamp()).max(1) as u64;

        self.tokens.delete_refresh_token(&claims.sub).await?;
        self.tokens.revoke_access_token(&claims.sub, token, ttl).await?;

        log::info!("로그아웃 완료 - subject: {}", claims.sub);
        Ok(())
    }

    fn refresh_ttl(&self) -> u64 {
        self.codec().config().refresh_lifetime_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::RevocationStore;
    use crate::domain::entities::MemberRole;
    use crate::domain::models::auth::Principal;
    use crate::services::auth::testing::{fixture, PASSWORD};
    use crate::utils::clock::Clock;
    use chrono::Duration;

    fn bearer(token: &str) -> String {
        TokenCodec::with_scheme(token)
    }

    #[actix_web::test]
    async fn test_scenario_login_then_authenticated() {
        let fx = fixture();

        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();
        let result = fx.auth.authenticate(Some(&bearer(&pair.access_token))).await.unwrap();

        assert_eq!(result, Authentication::Authenticated(Principal::new("alice", MemberRole::User)));
        assert_eq!(fx.store.get("refresh:alice").await.unwrap(), Some(pair.refresh_token));
    }

    #[actix_web::test]
    async fn test_scenario_logout_revokes_access_token() {
        let fx = fixture();

        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();
        let header = bearer(&pair.access_token);
        fx.auth.logout(Some(&header)).await.unwrap();

        assert_eq!(
            fx.auth.authenticate(Some(&header)).await.unwrap(),
            Authentication::Anonymous(AnonymousReason::Revoked)
        );
        assert!(fx.store.get("refresh:alice").await.unwrap().is_none());
        assert_eq!(fx.store.get("revoked:alice").await.unwrap(), Some(pair.access_token));
    }

    #[actix_web::test]
    async fn test_revocation_entry_expires_with_access_token() {
        let fx = fixture();

        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();
        let header = bearer(&pair.access_token);
        fx.clock.advance(Duration::seconds(4));
        fx.auth.logout(Some(&header)).await.unwrap();

        // now == exp: 토큰은 아직 디코딩되므로 폐기 항목이 남아 있어야 함
        fx.clock.advance(Duration::seconds(6));
        assert!(fx.auth.codec().decode_kind(&pair.access_token, TokenKind::Access).is_ok());
        assert!(fx.store.get("revoked:alice").await.unwrap().is_some());
        assert_eq!(
            fx.auth.authenticate(Some(&header)).await.unwrap(),
            Authentication::Anonymous(AnonymousReason::Revoked)
        );

        fx.clock.advance(Duration::seconds(1));
        assert!(fx.store.get("revoked:alice").await.unwrap().is_none());
        assert_eq!(
            fx.auth.authenticate(Some(&header)).await.unwrap(),
            Authentication::Anonymous(AnonymousReason::InvalidToken)
        );
    }

    #[actix_web::test]
    async fn test_logout_in_last_second_still_revokes() {
        let fx = fixture();

        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();
        let header = bearer(&pair.access_token);
        fx.clock.advance(Duration::seconds(10));
        fx.auth.logout(Some(&header)).await.unwrap();

        assert_eq!(fx.store.get("revoked:alice").await.unwrap(), Some(pair.access_token.clone()));
        assert_eq!(
            fx.auth.authenticate(Some(&header)).await.unwrap(),
            Authentication::Anonymous(AnonymousReason::Revoked)
        );
    }

    #[actix_web::test]
    async fn test_scenario_refresh_rotates_pair() {
        let fx = fixture();

        let original = fx.auth.login("alice", PASSWORD).await.unwrap();
        let rotated = fx.auth.refresh(Some(&bearer(&original.refresh_token))).await.unwrap();

        assert_ne!(rotated, original);
        assert_ne!(rotated.refresh_token, original.refresh_token);
        assert_eq!(fx.store.get("refresh:alice").await.unwrap(), Some(rotated.refresh_token.clone()));

        let replay = fx.auth.refresh(Some(&bearer(&original.refresh_token))).await;
        assert!(matches!(replay, Err(AppError::InvalidRefreshToken)));

        let claims = fx.auth.codec().decode(&rotated.access_token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.auth, MemberRole::User);
    }

    #[actix_web::test]
    async fn test_scenario_refresh_without_stored_token() {
        let fx = fixture();
        let token = fx
            .auth
            .codec()
            .issue("carol", MemberRole::User, TokenKind::Refresh, fx.clock.now())
            .unwrap();

        let result = fx.auth.refresh(Some(&bearer(&token))).await;
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[actix_web::test]
    async fn test_refresh_after_logout_fails() {
        let fx = fixture();

        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();
        fx.auth.logout(Some(&bearer(&pair.access_token))).await.unwrap();

        let result = fx.auth.refresh(Some(&bearer(&pair.refresh_token))).await;
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[actix_web::test]
    async fn test_refresh_rejects_bad_input() {
        let fx = fixture();
        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();

        assert!(matches!(fx.auth.refresh(None).await, Err(AppError::InvalidRefreshToken)));
        assert!(matches!(
            fx.auth.refresh(Some(&pair.refresh_token)).await,
            Err(AppError::InvalidRefreshToken)
        ));
        assert!(matches!(
            fx.auth.refresh(Some(&bearer(&pair.access_token))).await,
            Err(AppError::InvalidRefreshToken)
        ));

        fx.clock.advance(Duration::seconds(101));
        assert!(matches!(
            fx.auth.refresh(Some(&bearer(&pair.refresh_token))).await,
            Err(AppError::InvalidRefreshToken)
        ));
    }

    #[actix_web::test]
    async fn test_scenario_tampered_signature_is_anonymous() {
        let fx = fixture();
        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();

        let mut tampered = pair.access_token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(
            fx.auth.authenticate(Some(&bearer(&tampered))).await.unwrap(),
            Authentication::Anonymous(AnonymousReason::InvalidToken)
        );
    }

    #[actix_web::test]
    async fn test_authenticate_without_or_with_raw_token() {
        let fx = fixture();
        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();

        assert_eq!(
            fx.auth.authenticate(None).await.unwrap(),
            Authentication::Anonymous(AnonymousReason::NoToken)
        );
        assert_eq!(
            fx.auth.authenticate(Some(&pair.access_token)).await.unwrap(),
            Authentication::Anonymous(AnonymousReason::InvalidToken)
        );
        assert_eq!(
            fx.auth.authenticate(Some(&bearer(&pair.refresh_token))).await.unwrap(),
            Authentication::Anonymous(AnonymousReason::InvalidToken)
        );
    }

    #[actix_web::test]
    async fn test_login_failure_does_not_reveal_reason() {
        let fx = fixture();

        let unknown = fx.auth.login("nobody", PASSWORD).await.unwrap_err();
        let wrong = fx.auth.login("alice", "wrongpass1").await.unwrap_err();

        assert!(matches!(unknown, AppError::BadCredentials));
        assert!(matches!(wrong, AppError::BadCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(fx.store.is_empty());
    }

    #[actix_web::test]
    async fn test_logout_errors() {
        let fx = fixture();
        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();

        assert!(matches!(fx.auth.logout(None).await, Err(AppError::MissingToken)));
        assert!(matches!(
            fx.auth.logout(Some(&pair.access_token)).await,
            Err(AppError::InvalidToken(TokenError::NotFound))
        ));

        fx.clock.advance(Duration::seconds(11));
        assert!(matches!(
            fx.auth.logout(Some(&bearer(&pair.access_token))).await,
            Err(AppError::InvalidToken(TokenError::Expired))
        ));
    }

    #[actix_web::test]
    async fn test_admin_principal_keeps_role() {
        let fx = fixture();
        let pair = fx.auth.login("admin01", PASSWORD).await.unwrap();

        let result = fx.auth.authenticate(Some(&bearer(&pair.access_token))).await.unwrap();
        assert!(result.principal().is_some_and(|p| p.is_admin()));
    }
}
