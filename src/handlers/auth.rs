//! Authentication HTTP Handlers
//!
//! 로그인, 토큰 재발급, 로그아웃 엔드포인트입니다.
//! 액세스 토큰은 `Authorization` 응답 헤더로, 리프레시 토큰은 `RefreshToken` 쿠키로 전달됩니다.
//!
//! - `POST /api/v1/auth/login`
//! - `PATCH /api/v1/auth/reissue`
//! - `DELETE /api/v1/auth/logout`
use actix_web::http::header;
use actix_web::{delete, patch, post, web, HttpRequest, HttpResponse, HttpResponseBuilder};
use validator::Validate;

use crate::domain::dto::{LoginRequest, LoginResponse};
use crate::domain::models::token::TokenPair;
use crate::errors::AppError;
use crate::services::auth::{AuthService, TokenCodec};
use crate::utils::cookie::{refresh_cookie, refresh_cookie_value};

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::info!("로그인 시도 - username: {}", payload.username);
    let pair = auth.login(&payload.username, &payload.password).await?;

    Ok(with_tokens(HttpResponse::Ok(), &pair).json(LoginResponse::of()))
}

/// 토큰 재발급 핸들러
///
/// `RefreshToken` 쿠키의 토큰을 검증하고 새 토큰 쌍으로 교체합니다.
///
/// # Endpoint
/// `PATCH /api/v1/auth/reissue`
#[patch("/reissue")]
pub async fn reissue(
    auth: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let cookie = refresh_cookie_value(&req);
    let pair = auth.refresh(cookie.as_deref()).await?;

    Ok(with_tokens(HttpResponse::Created(), &pair).finish())
}

/// 로그아웃 핸들러
///
/// 리프레시 토큰을 삭제하고 현재 액세스 토큰을 남은 수명 동안 폐기합니다.
///
/// # Endpoint
/// `DELETE /api/v1/auth/logout`
#[delete("/logout")]
pub async fn logout(
    auth: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    auth.logout(authorization).await?;

    Ok(HttpResponse::Ok().finish())
}

fn with_tokens(mut builder: HttpResponseBuilder, pair: &TokenPair) -> HttpResponseBuilder {
    builder
        .insert_header((header::AUTHORIZATION, TokenCodec::with_scheme(&pair.access_token)))
        .cookie(refresh_cookie(&pair.refresh_token));
    builder
}
