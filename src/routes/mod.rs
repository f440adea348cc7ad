//! API 라우트 설정 모듈
//!
//! 인증, 회원 관련 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Auth Middleware Usage
//!
//! 로그인, 재발급, 로그아웃, 회원가입은 인증 없이 접근합니다. 로그아웃은 핸들러에서
//! Authorization 헤더를 직접 검증합니다.
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/member/me")
//!         .wrap(AuthMiddleware::required_with_roles(vec![MemberRole::User, MemberRole::Admin]))
//!         .service(handlers::members::me)
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::domain::entities::MemberRole;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// `web::Data<AuthService>`와 `web::Data<MemberService>`가 앱에 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_member_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// - `POST /api/v1/auth/login` - 아이디/비밀번호 로그인
/// - `PATCH /api/v1/auth/reissue` - `RefreshToken` 쿠키로 토큰 재발급
/// - `DELETE /api/v1/auth/logout` - 로그아웃
///
/// ```bash
/// curl -i -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","password":"password12"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::reissue)
            .service(handlers::auth::logout),
    );
}

/// 회원 관련 라우트를 설정합니다
///
/// `/api/v1/member/me` 스코프가 `/api/v1/member`보다 먼저 등록되어야 합니다.
fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/member/me")
            .wrap(AuthMiddleware::required_with_roles(vec![MemberRole::User, MemberRole::Admin]))
            .service(handlers::members::me),
    );

    cfg.service(web::scope("/api/v1/member").service(handlers::members::signup));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
