//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - 토큰 검증, 폐기 목록 확인
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - 토큰 발급/검증, 회원 관리
//! ├─────────────────────────────────────────────┤
//!   Repositories - 토큰 키 규칙, 회원 저장소
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data`로 주입되고, 인증된 회원은 [`Principal`] 추출기로 전달됩니다.
//!
//! - **`auth`**: 로그인, 토큰 재발급, 로그아웃
//! - **`members`**: 회원가입, 현재 회원 조회
//!
//! [`Principal`]: crate::domain::models::auth::Principal

pub mod auth;
pub mod members;
