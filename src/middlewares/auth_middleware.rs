//! 인증 미들웨어
//!
//! 요청 파이프라인에서 Authorization 헤더를 검증하고 인증된 [`Principal`]을
//! 요청 extensions에 저장합니다. 순서는 다음과 같이 고정입니다.
//!
//! ```text
//! 토큰 추출 → 검증 → 폐기 목록 확인 → (역할 확인) → 핸들러
//! ```
//!
//! [`Principal`]: crate::domain::models::auth::Principal

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::entities::MemberRole;
use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_role: None,
        }
    }

    pub fn new_with_role(mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            mode,
            required_role: Some(required_role),
        }
    }

    /// 필수 인증: 익명 요청은 401
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증: 익명 요청도 핸들러로 전달
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 특정 역할 요구: 역할 불일치는 403
    pub fn required_with_role(role: MemberRole) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::Single(role))
    }

    /// 복수 역할 중 하나 요구
    pub fn required_with_roles(roles: Vec<MemberRole>) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::Any(roles))
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};

    use crate::domain::models::auth::{OptionalPrincipal, Principal};
    use crate::services::auth::testing::{fixture, PASSWORD};
    use crate::services::auth::TokenCodec;

    async fn whoami(principal: Principal) -> HttpResponse {
        HttpResponse::Ok().body(principal.subject)
    }

    async fn maybe(principal: OptionalPrincipal) -> HttpResponse {
        let name = principal.0.map(|p| p.subject).unwrap_or_else(|| "anonymous".to_string());
        HttpResponse::Ok().body(name)
    }

    macro_rules! app {
        ($fx:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::from($fx.auth.clone()))
                    .service(
                        web::scope("/required")
                            .wrap(AuthMiddleware::required())
                            .route("", web::get().to(whoami)),
                    )
                    .service(
                        web::scope("/admin")
                            .wrap(AuthMiddleware::required_with_role(MemberRole::Admin))
                            .route("", web::get().to(whoami)),
                    )
                    .service(
                        web::scope("/optional")
                            .wrap(AuthMiddleware::optional())
                            .route("", web::get().to(maybe)),
                    ),
            )
            .await
        };
    }

    fn get(path: &str, token: Option<&str>) -> test::TestRequest {
        let req = test::TestRequest::get().uri(path);
        match token {
            Some(token) => req.insert_header((header::AUTHORIZATION, TokenCodec::with_scheme(token))),
            None => req,
        }
    }

    #[actix_web::test]
    async fn test_required_rejects_anonymous_with_entry_point_body() {
        let fx = fixture();
        let app = app!(fx);

        let res = test::call_service(&app, get("/required", None).to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["name"], "INVALID_AUTH_TOKEN");
        assert_eq!(body["status"], 401);
    }

    #[actix_web::test]
    async fn test_required_accepts_valid_token() {
        let fx = fixture();
        let app = app!(fx);
        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();

        let res = test::call_service(&app, get("/required", Some(&pair.access_token)).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "alice");
    }

    #[actix_web::test]
    async fn test_required_rejects_invalid_and_revoked_tokens() {
        let fx = fixture();
        let app = app!(fx);
        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();

        let res = test::call_service(&app, get("/required", Some("not-a-token")).to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let raw = test::TestRequest::get()
            .uri("/required")
            .insert_header((header::AUTHORIZATION, pair.access_token.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, raw).await.status(), StatusCode::UNAUTHORIZED);

        fx.auth
            .logout(Some(&TokenCodec::with_scheme(&pair.access_token)))
            .await
            .unwrap();
        let res = test::call_service(&app, get("/required", Some(&pair.access_token)).to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_role_requirement() {
        let fx = fixture();
        let app = app!(fx);
        let user = fx.auth.login("alice", PASSWORD).await.unwrap();
        let admin = fx.auth.login("admin01", PASSWORD).await.unwrap();

        let res = test::call_service(&app, get("/admin", Some(&user.access_token)).to_request()).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["name"], "ACCESS_DENIED");

        let res = test::call_service(&app, get("/admin", Some(&admin.access_token)).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "admin01");
    }

    #[actix_web::test]
    async fn test_optional_forwards_anonymous() {
        let fx = fixture();
        let app = app!(fx);
        let pair = fx.auth.login("alice", PASSWORD).await.unwrap();

        let res = test::call_service(&app, get("/optional", None).to_request()).await;
        assert_eq!(test::read_body(res).await, "anonymous");

        let res = test::call_service(&app, get("/optional", Some("garbage")).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "anonymous");

        let res = test::call_service(&app, get("/optional", Some(&pair.access_token)).to_request()).await;
        assert_eq!(test::read_body(res).await, "alice");
    }
}
