//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 로그인 요청
///
/// 형식 검증만 수행합니다. 아이디/비밀번호 불일치는 인증 단계에서
/// 구분 없이 하나의 에러로 처리됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "아이디를 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
