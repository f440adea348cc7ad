//! 토큰 기반 인증 서비스
//!
//! - [`token_codec`]: 토큰 서명/검증
//! - [`token_issuer`]: 액세스/리프레시 토큰 쌍 발급
//! - [`auth_service`]: 요청별 인증 파이프라인과 로그인/재발급/로그아웃
//! - [`credential_verifier`]: 로그인 자격 증명 검증 인터페이스

pub mod token_codec;
pub mod token_issuer;
pub mod auth_service;
pub mod credential_verifier;

#[cfg(test)]
pub mod testing;

pub use token_codec::*;
pub use token_issuer::*;
pub use auth_service::*;
pub use credential_verifier::*;
