//! 회원 엔티티
//!
//! 로그인 아이디(username)는 회원을 유일하게 식별하며 토큰의 subject로 사용됩니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 회원 역할
///
/// 토큰의 `auth` 클레임에는 `"USER"` / `"ADMIN"` 이름으로 직렬화됩니다.
/// 알 수 없는 이름은 역직렬화에 실패합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberRole {
    User,
    Admin,
}

impl MemberRole {
    /// 권한 문자열 (`ROLE_USER`, `ROLE_ADMIN`)
    pub fn authority(&self) -> &'static str {
        match self {
            MemberRole::User => "ROLE_USER",
            MemberRole::Admin => "ROLE_ADMIN",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::User => "USER",
            MemberRole::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 회원
#[derive(Debug, Clone)]
pub struct Member {
    pub username: String,
    pub password_hash: String,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// 일반 회원(USER)을 생성합니다.
    pub fn new(username: String, password_hash: String) -> Self {
        Self::with_role(username, password_hash, MemberRole::User)
    }

    pub fn with_role(username: String, password_hash: String, role: MemberRole) -> Self {
        Self {
            username,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }
}
