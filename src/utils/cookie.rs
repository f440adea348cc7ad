//! 리프레시 토큰 쿠키
//!
//! 쿠키 값은 `Bearer <refreshToken>`을 URL 인코딩한 문자열입니다 (공백은 `%20`).

use actix_web::cookie::Cookie;
use actix_web::HttpRequest;

use crate::services::auth::token_codec::TokenCodec;

pub const REFRESH_TOKEN_COOKIE: &str = "RefreshToken";

/// 로그인/재발급 응답에 실을 쿠키를 만듭니다.
pub fn refresh_cookie(refresh_token: &str) -> Cookie<'static> {
    let value = urlencoding::encode(&TokenCodec::with_scheme(refresh_token)).into_owned();

    Cookie::build(REFRESH_TOKEN_COOKIE, value)
        .path("/")
        .http_only(true)
        .finish()
}

/// 요청 쿠키에서 디코딩된 값을 꺼냅니다. 접두사 제거는 호출자가 합니다.
pub fn refresh_cookie_value(req: &HttpRequest) -> Option<String> {
    let cookie = req.cookie(REFRESH_TOKEN_COOKIE)?;

    match urlencoding::decode(cookie.value()) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            log::warn!("RefreshToken 쿠키 디코딩 실패: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_refresh_cookie_is_url_encoded() {
        let cookie = refresh_cookie("aaa.bbb.ccc");

        assert_eq!(cookie.name(), REFRESH_TOKEN_COOKIE);
        assert_eq!(cookie.value(), "Bearer%20aaa.bbb.ccc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_refresh_cookie_value_decodes() {
        let req = TestRequest::default()
            .cookie(refresh_cookie("aaa.bbb.ccc"))
            .to_http_request();

        assert_eq!(refresh_cookie_value(&req).as_deref(), Some("Bearer aaa.bbb.ccc"));
    }

    #[test]
    fn test_missing_cookie() {
        let req = TestRequest::default().to_http_request();
        assert!(refresh_cookie_value(&req).is_none());
    }
}
