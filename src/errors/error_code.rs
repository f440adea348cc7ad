//! 클라이언트에 노출되는 에러 코드와 응답 본문

use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// HTTP 상태, 에러명, 사용자 메시지의 묶음
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidValue,
    InvalidRefreshToken,
    InvalidAuthToken,
    UnauthorizedMember,
    BadCredential,
    AccessDenied,
    AlreadyExistMember,
    InternalServerError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidValue | ErrorCode::InvalidRefreshToken => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidAuthToken | ErrorCode::UnauthorizedMember | ErrorCode::BadCredential => {
                StatusCode::UNAUTHORIZED
            }
            ErrorCode::AccessDenied => StatusCode::FORBIDDEN,
            ErrorCode::AlreadyExistMember => StatusCode::CONFLICT,
            ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            ErrorCode::InvalidAuthToken => "INVALID_AUTH_TOKEN",
            ErrorCode::UnauthorizedMember => "UNAUTHORIZED_MEMBER",
            ErrorCode::BadCredential => "BAD_CREDENTIAL",
            ErrorCode::AccessDenied => "ACCESS_DENIED",
            ErrorCode::AlreadyExistMember => "ALREADY_EXIST_MEMBER",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidValue => "값이 유효하지 않습니다.",
            ErrorCode::InvalidRefreshToken => "리프레시 토큰이 유효하지 않습니다",
            ErrorCode::InvalidAuthToken => "인증 정보가 없는 토큰입니다",
            ErrorCode::UnauthorizedMember => "회원 인증 정보가 존재하지 않습니다",
            ErrorCode::BadCredential => "인증정보가 일치하지 않습니다.",
            ErrorCode::AccessDenied => "권한이 없습니다.",
            ErrorCode::AlreadyExistMember => "이미 존재하는 회원입니다.",
            ErrorCode::InternalServerError => "내부 서버 에러입니다.",
        }
    }
}

/// 에러 응답 본문
///
/// ```json
/// {"timestamp": "...", "status": 401, "name": "INVALID_AUTH_TOKEN", "message": "인증 정보가 없는 토큰입니다"}
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub name: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorResponse {
    pub fn of(code: ErrorCode) -> Self {
        Self {
            timestamp: Utc::now(),
            status: code.status().as_u16(),
            name: code.name(),
            message: code.message(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
