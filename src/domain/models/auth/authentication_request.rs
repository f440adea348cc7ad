//! 라우트 단위 인증 요구사항

use crate::domain::entities::MemberRole;

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함 (익명 요청은 401)
    Required,
    /// 인증이 선택사항임 (익명 요청도 핸들러로 전달)
    Optional,
}

/// 요구되는 역할 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(MemberRole),
    /// 여러 역할 중 하나라도 있으면 허용
    Any(Vec<MemberRole>),
}

impl RequiredRole {
    /// 회원 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, role: &MemberRole) -> bool {
        match self {
            RequiredRole::Single(required) => required == role,
            RequiredRole::Any(required) => required.contains(role),
        }
    }
}
