//! 인증 응답 DTO

use serde::Serialize;

/// 로그인 성공 응답. 토큰은 본문이 아닌 헤더와 쿠키로 전달됩니다.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
}

impl LoginResponse {
    pub fn of() -> Self {
        Self {
            message: "로그인에 성공하였습니다.",
        }
    }
}
