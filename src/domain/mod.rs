//! 도메인 계층
//!
//! - [`entities`]: 회원 엔티티와 역할
//! - [`models`]: 인증 주체(Principal), 인증 결과, 토큰 클레임
//! - [`dto`]: HTTP 요청/응답 DTO

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
