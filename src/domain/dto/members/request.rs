//! 회원가입 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청
///
/// - username: 알파벳 소문자와 숫자, 4~10자
/// - password: 알파벳 대/소문자와 숫자, 8~15자
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 4, max = 10, message = "아이디는 4자리 이상 10자리 이하로 입력해야합니다."))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 8, max = 15, message = "비밀번호는 8자리 이상, 15자리 이하로 입력해야합니다."))]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() || !username.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_username")
            .with_message("아이디는 알파벳 소문자, 숫자의 조합으로 입력해야합니다.".into()));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new("invalid_password")
            .with_message("비밀번호는 알파벳 대/소문자, 숫자의 조합으로 입력해야합니다.".into()));
    }
    Ok(())
}
