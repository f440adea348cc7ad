//! 액세스/리프레시 토큰 쌍 발급
//!
//! 두 토큰은 같은 `iat`로 발급됩니다. 발급은 저장소와 무관하며
//! 리프레시 토큰의 저장 여부는 호출자가 결정합니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::MemberRole;
use crate::domain::models::token::{TokenKind, TokenPair};
use crate::errors::AppResult;
use crate::services::auth::token_codec::TokenCodec;

pub struct TokenIssuer {
    codec: Arc<TokenCodec>,
}

impl TokenIssuer {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// 현재 시각으로 토큰 쌍을 발급합니다.
    pub fn issue_pair(&self, subject: &str, role: MemberRole) -> AppResult<TokenPair> {
        self.issue_pair_at(subject, role, self.codec.now())
    }

    /// 주어진 시각으로 토큰 쌍을 발급합니다.
    pub fn issue_pair_at(&self, subject: &str, role: MemberRole, now: DateTime<Utc>) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.codec.issue(subject, role, TokenKind::Access, now)?,
            refresh_token: self.codec.issue(subject, role, TokenKind::Refresh, now)?,
        })
    }
}
