//! JWT 클레임과 액세스/리프레시 토큰 쌍
//!
//! 서명 무결성과 만료 여부는 외부 상태 없이 토큰만으로 검증할 수 있습니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::MemberRole;
use crate::domain::models::auth::Principal;

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// 토큰 클레임
///
/// `iat`/`exp`는 유닉스 초(NumericDate)입니다. `jti`는 같은 초에 발급된
/// 토큰끼리도 서로 다른 문자열이 되도록 매 발급마다 새로 생성됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 회원 아이디
    pub sub: String,
    /// 역할
    pub auth: MemberRole,
    pub iat: i64,
    pub exp: i64,
    pub token_type: TokenKind,
    pub jti: String,
}

impl TokenClaims {
    pub fn principal(&self) -> Principal {
        Principal::new(self.sub.clone(), self.auth)
    }
}

/// 함께 발급되고 함께 전달되는 토큰 쌍
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
