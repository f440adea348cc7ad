//! # Member HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/member/signup` | 회원가입 | 201 Created / 409 Conflict |
//! | `GET` | `/api/v1/member/me` | 현재 회원 정보 (인증 필요) | 200 OK |
use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::{MemberResponse, SignupRequest};
use crate::domain::models::auth::Principal;
use crate::errors::{AppError, ErrorContext};
use crate::services::members::MemberService;

/// 회원가입 핸들러
///
/// bcrypt 해싱은 블로킹 스레드 풀에서 실행됩니다.
///
/// # Endpoint
/// `POST /api/v1/member/signup`
#[post("/signup")]
pub async fn signup(
    members: web::Data<MemberService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let response = web::block(move || members.signup(request))
        .await
        .context("회원가입 작업 실패")??;
    Ok(HttpResponse::Created().json(response))
}

/// 현재 로그인한 회원 조회
///
/// 인증 미들웨어가 저장한 [`Principal`]을 그대로 응답합니다.
///
/// # Endpoint
/// `GET /api/v1/member/me`
#[get("")]
pub async fn me(principal: Principal) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MemberResponse::from(principal)))
}
