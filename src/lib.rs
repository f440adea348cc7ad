//! To-Do 서비스 인증 코어
//!
//! 토큰 기반 인증과 세션 폐기를 제공하는 actix-web 서비스입니다.
//!
//! # Features
//!
//! - **토큰 코덱**: HS256 서명, 만료/서명/구조 검증과 실패 사유 분류
//! - **토큰 발급**: 같은 시각 기준의 액세스/리프레시 토큰 쌍
//! - **인증 파이프라인**: 요청마다 토큰 검증과 폐기 목록 확인
//! - **로그인/재발급/로그아웃**: 리프레시 토큰 교체와 로그아웃 토큰 폐기
//! - **Redis**: TTL 기반 폐기 저장소 (메모리 구현으로 대체 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 토큰 추출 → 검증 → 폐기 확인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← TokenCodec, TokenIssuer, AuthService, MemberService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← refresh:/revoked: 키 규칙, 회원 저장소
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RevocationStore │ ← Redis 또는 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todo_auth_service::services::auth::{AuthService, TokenCodec};
//!
//! let codec = Arc::new(TokenCodec::new(JwtConfig::from_env()?, Arc::new(SystemClock)));
//! let auth = AuthService::new(codec, TokenRepository::new(store), members);
//!
//! let pair = auth.login("alice", "password12").await?;
//! let result = auth.authenticate(Some(&format!("Bearer {}", pair.access_token))).await?;
//! ```

pub mod config;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
