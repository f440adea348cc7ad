//! 토큰 디코딩/검증 실패 사유
//!
//! 실패 사유는 로그에만 남기고 클라이언트에는 일반적인 401로만 노출합니다.

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

/// 토큰 코덱이 반환하는 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 구조가 깨진 토큰 (세그먼트, base64, JSON, 필수 클레임, 알 수 없는 역할)
    #[error("JWT claims is empty, 잘못된 JWT 토큰 입니다.")]
    Malformed,

    /// `now > exp`
    #[error("Expired JWT token, 만료된 JWT token 입니다.")]
    Expired,

    /// 서명 불일치
    #[error("Invalid JWT signature, 유효하지 않는 JWT 서명 입니다.")]
    SignatureInvalid,

    /// 지원하지 않는 알고리즘
    #[error("Unsupported JWT token, 지원되지 않는 JWT 토큰 입니다.")]
    Unsupported,

    /// 액세스 토큰 자리에 리프레시 토큰이 오는 등 용도가 다른 토큰
    #[error("Wrong JWT token type, 용도가 다른 JWT 토큰 입니다.")]
    WrongKind,

    /// 전송 접두사(`Bearer `)가 없는 헤더 값
    #[error("Not found token, 토큰을 찾을 수 없습니다.")]
    NotFound,
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => TokenError::Unsupported,
            _ => TokenError::Malformed,
        }
    }
}
