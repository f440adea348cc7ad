//! 회원 서비스
//!
//! 회원가입과 로그인 자격 증명 검증을 담당합니다. 비밀번호는 bcrypt로 해싱되며
//! cost는 실행 환경별 [`PasswordConfig`](crate::config::PasswordConfig) 값을 사용합니다.

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use validator::Validate;

use crate::domain::dto::{SignupRequest, SignupResponse};
use crate::domain::entities::{Member, MemberRole};
use crate::domain::models::auth::Principal;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::members::MemberRepository;
use crate::services::auth::CredentialVerifier;

pub struct MemberService {
    members: Arc<MemberRepository>,
    bcrypt_cost: u32,
    /// 존재하지 않는 회원도 같은 비용으로 검증하기 위한 해시
    dummy_hash: String,
}

impl MemberService {
    /// # Errors
    ///
    /// * `AppError::InternalError` - 잘못된 bcrypt cost
    pub fn new(members: Arc<MemberRepository>, bcrypt_cost: u32) -> AppResult<Self> {
        let dummy_hash = bcrypt::hash("dummy-password", bcrypt_cost).context("bcrypt 초기화 실패")?;

        Ok(Self {
            members,
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// 회원가입
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 아이디/비밀번호 형식 오류
    /// * `AppError::AlreadyExistMember` - 이미 존재하는 아이디
    pub fn signup(&self, request: SignupRequest) -> AppResult<SignupResponse> {
        request.validate()?;
        self.create_member(&request.username, &request.password, MemberRole::User)?;
        Ok(SignupResponse::of())
    }

    /// 주어진 역할로 회원을 생성합니다.
    pub fn create_member(&self, username: &str, password: &str, role: MemberRole) -> AppResult<()> {
        if self.members.exists_by_username(username)? {
            return Err(AppError::AlreadyExistMember(username.to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        self.members
            .insert(Member::with_role(username.to_string(), password_hash, role))?;

        log::info!("회원가입 완료 - username: {}, role: {}", username, role);
        Ok(())
    }
}

/// bcrypt 검증은 워커 스레드를 막지 않도록 블로킹 스레드 풀에서 실행합니다.
#[async_trait]
impl CredentialVerifier for MemberService {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Principal> {
        let member = self.members.find_by_username(username)?;

        let hash = member
            .as_ref()
            .map(|m| m.password_hash.clone())
            .unwrap_or_else(|| self.dummy_hash.clone());
        let password = password.to_string();
        let is_valid = web::block(move || bcrypt::verify(password, &hash))
            .await
            .context("비밀번호 검증 작업 실패")?
            .context("비밀번호 검증 실패")?;

        match member {
            Some(member) if is_valid => Ok(Principal::new(member.username, member.role)),
            _ => Err(AppError::BadCredentials),
        }
    }
}
