//! 인증된 주체와 요청별 인증 결과
//!
//! 인증 미들웨어가 요청 extensions에 [`Principal`]을 저장하고,
//! 핸들러는 추출기로 이를 명시적으로 전달받습니다. 전역 보안 컨텍스트는 없습니다.

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::domain::entities::MemberRole;
use crate::errors::AppError;

/// 인증된 주체 (요청 단위, 불변)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub subject: String,
    pub role: MemberRole,
}

impl Principal {
    pub fn new(subject: impl Into<String>, role: MemberRole) -> Self {
        Self {
            subject: subject.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }
}

/// 익명으로 처리된 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonymousReason {
    /// Authorization 헤더 없음
    NoToken,
    /// 접두사 누락, 서명/구조 오류, 만료, 용도 불일치
    InvalidToken,
    /// 로그아웃되어 폐기 목록에 있는 토큰
    Revoked,
}

/// 요청별 인증 파이프라인 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    Authenticated(Principal),
    Anonymous(AnonymousReason),
}

impl Authentication {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Authentication::Authenticated(principal) => Some(principal),
            Authentication::Anonymous(_) => None,
        }
    }
}

/// 인증이 필요한 핸들러용 추출기. 주체가 없으면 401입니다.
impl FromRequest for Principal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Principal>() {
            Some(principal) => ready(Ok(principal.clone())),
            None => ready(Err(AppError::UnauthorizedMember)),
        }
    }
}

/// 인증이 선택적인 핸들러용 추출기
#[derive(Debug, Clone)]
pub struct OptionalPrincipal(pub Option<Principal>);

impl FromRequest for OptionalPrincipal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(OptionalPrincipal(req.extensions().get::<Principal>().cloned())))
    }
}
