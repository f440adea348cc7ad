//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 액세스 토큰 추출 및 검증
//! - 로그아웃된 토큰(폐기 목록) 거부
//! - 인증된 주체를 request extension에 저장
//! - 선택적/강제 인증 모드와 역할 요구사항 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::domain::entities::MemberRole;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/member/me")
//!             .wrap(AuthMiddleware::required_with_roles(vec![MemberRole::User, MemberRole::Admin]))
//!             .route("", web::get().to(me))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
