//! 회원 응답 DTO

use serde::Serialize;

use crate::domain::entities::MemberRole;
use crate::domain::models::auth::Principal;

/// 회원가입 성공 응답
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
}

impl SignupResponse {
    pub fn of() -> Self {
        Self {
            message: "회원가입에 성공하였습니다.",
        }
    }
}

/// 현재 로그인한 회원 정보
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub username: String,
    pub role: MemberRole,
    pub authority: &'static str,
}

impl From<Principal> for MemberResponse {
    fn from(principal: Principal) -> Self {
        Self {
            authority: principal.role.authority(),
            username: principal.subject,
            role: principal.role,
        }
    }
}
