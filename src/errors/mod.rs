//! 에러 처리 모듈
//!
//! 토큰 코덱 에러([`TokenError`]), 애플리케이션 에러([`AppError`]),
//! 그리고 HTTP 응답으로 변환될 때 사용되는 [`ErrorCode`]를 제공합니다.

pub mod errors;
pub mod error_code;
pub mod token_error;

pub use errors::*;
pub use error_code::*;
pub use token_error::*;
