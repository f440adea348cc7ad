//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::{Authentication, AuthMode, RequiredRole};
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let Some(auth) = req.app_data::<web::Data<AuthService>>().cloned() else {
                log::error!("AuthService가 등록되지 않았습니다");
                return Ok(reject(req, AppError::InternalError("AuthService 미등록".to_string())));
            };

            let authorization = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);

            let authentication = match auth.authenticate(authorization.as_deref()).await {
                Ok(authentication) => authentication,
                Err(err) => return Ok(reject(req, err)),
            };

            match (mode, authentication) {
                (AuthMode::Required, Authentication::Anonymous(reason)) => {
                    log::warn!("인증 실패: {:?} - {}", reason, req.path());
                    return Ok(reject(req, AppError::MissingToken));
                }
                (_, Authentication::Authenticated(principal)) => {
                    if let Some(ref required) = required_role {
                        if !required.is_satisfied(&principal.role) {
                            log::warn!(
                                "권한 부족: subject {} ({}), 필요 권한: {:?}",
                                principal.subject,
                                principal.role,
                                required
                            );
                            if mode == AuthMode::Required {
                                return Ok(reject(req, AppError::AccessDenied));
                            }
                            let res = service.call(req).await?;
                            return Ok(res.map_into_left_body());
                        }
                    }

                    log::debug!("인증 성공: subject {}", principal.subject);
                    req.extensions_mut().insert(principal);
                }
                (AuthMode::Optional, Authentication::Anonymous(reason)) => {
                    log::debug!("선택적 인증: {:?}, 요청 진행", reason);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청을 핸들러로 넘기지 않고 에러 응답으로 끝냅니다.
fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
