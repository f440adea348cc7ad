//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러는 [`ErrorCode`]로 매핑되어
//! `{timestamp, status, name, message}` 형태의 JSON 본문으로 응답됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn reissue(cookie: Option<&str>) -> Result<TokenPair, AppError> {
//!     let token = cookie.ok_or(AppError::InvalidRefreshToken)?;
//!     // ...
//! }
//! ```

use std::collections::BTreeMap;

use actix_web::HttpResponse;
use thiserror::Error;
use validator::ValidationErrors;

use crate::errors::error_code::{ErrorCode, ErrorResponse};
use crate::errors::token_error::TokenError;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
/// 토큰 실패 사유 같은 내부 정보는 응답 본문에 포함되지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 폐기 저장소(Redis) I/O 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 요청 DTO 검증 실패 (400)
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// 서명/구조/만료 등으로 유효하지 않은 액세스 토큰 (401)
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    /// 토큰이 반드시 필요한 요청에 Authorization 헤더가 없음 (401)
    #[error("Missing token")]
    MissingToken,

    /// 검증 실패 또는 저장된 값과 불일치하는 리프레시 토큰 (400)
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// 로그인 실패. 존재하지 않는 회원과 비밀번호 불일치를 구분하지 않습니다. (401)
    #[error("Bad credentials")]
    BadCredentials,

    /// 인증 정보가 없는 요청 (401)
    #[error("Unauthorized member")]
    UnauthorizedMember,

    /// 역할 부족 (403)
    #[error("Access denied")]
    AccessDenied,

    /// 중복 회원 (409)
    #[error("Already exist member: {0}")]
    AlreadyExistMember(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출할 에러 코드
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ValidationError(_) => ErrorCode::InvalidValue,
            AppError::InvalidToken(_) | AppError::MissingToken => ErrorCode::InvalidAuthToken,
            AppError::InvalidRefreshToken => ErrorCode::InvalidRefreshToken,
            AppError::BadCredentials => ErrorCode::BadCredential,
            AppError::UnauthorizedMember => ErrorCode::UnauthorizedMember,
            AppError::AccessDenied => ErrorCode::AccessDenied,
            AppError::AlreadyExistMember(_) => ErrorCode::AlreadyExistMember,
            AppError::RedisError(_) | AppError::InternalError(_) => ErrorCode::InternalServerError,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.code().status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 필드별 메시지를 `data`에 담습니다.
    fn error_response(&self) -> HttpResponse {
        let code = self.code();

        match code {
            ErrorCode::InternalServerError => log::error!("{}", self),
            _ => log::debug!("요청 실패: {}", self),
        }

        let mut body = ErrorResponse::of(code);
        if let AppError::ValidationError(errors) = self {
            body = body.with_data(serde_json::json!(field_messages(errors)));
        }

        HttpResponse::build(code.status()).json(body)
    }
}

/// 필드명 → 첫 번째 검증 메시지
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| ErrorCode::InvalidValue.message().to_string());
            (field.to_string(), message)
        })
        .collect()
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_invalid_token_is_unauthorized() {
        let error = AppError::InvalidToken(TokenError::SignatureInvalid);
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::MissingToken.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_refresh_token_is_bad_request() {
        let response = AppError::InvalidRefreshToken.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_credential_errors_response() {
        assert_eq!(AppError::BadCredentials.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::UnauthorizedMember.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::AccessDenied.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_conflict_and_internal_errors_response() {
        let conflict = AppError::AlreadyExistMember("alice".to_string());
        assert_eq!(conflict.error_response().status(), StatusCode::CONFLICT);

        let redis = AppError::RedisError("connection refused".to_string());
        assert_eq!(redis.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_error_body_hides_token_reason() {
        let response = AppError::InvalidToken(TokenError::Expired).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], 401);
        assert_eq!(json["name"], "INVALID_AUTH_TOKEN");
        assert_eq!(json["message"], "인증 정보가 없는 토큰입니다");
        assert!(json.get("timestamp").is_some());
        assert!(!String::from_utf8_lossy(&body).contains("Expired"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
