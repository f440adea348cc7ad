//! JWT 토큰 코덱
//!
//! HS256 대칭 키로 토큰을 서명하고, 서명/구조/알고리즘/만료를 검증합니다.
//! 만료는 jsonwebtoken 내장 검사 대신 주입된 [`Clock`]으로 판단하며
//! 시계 오차 허용(leeway)은 두지 않습니다.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::entities::MemberRole;
use crate::domain::models::token::{TokenClaims, TokenKind};
use crate::errors::{AppError, AppResult, TokenError};
use crate::utils::clock::Clock;

/// Authorization 헤더의 전송 접두사
pub const BEARER_PREFIX: &str = "Bearer ";

const ALGORITHM: Algorithm = Algorithm::HS256;

pub struct TokenCodec {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret()),
            decoding_key: DecodingKey::from_secret(config.secret()),
            validation,
            config,
            clock,
        }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn lifetime(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.config.access_lifetime(),
            TokenKind::Refresh => self.config.refresh_lifetime(),
        }
    }

    /// 토큰을 발급합니다. `iat = now`, `exp = now + lifetime(kind)`
    ///
    /// 반환값은 접두사가 없는 토큰 문자열입니다. 헤더로 보낼 때는 [`with_scheme`](Self::with_scheme)을 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue(
        &self,
        subject: &str,
        role: MemberRole,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> AppResult<String> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            auth: role,
            iat: now.timestamp(),
            exp: (now + self.lifetime(kind)).timestamp(),
            token_type: kind,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명, 구조, 알고리즘, 만료를 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::SignatureInvalid` - 서명 불일치
    /// * `TokenError::Unsupported` - HS256이 아닌 알고리즘
    /// * `TokenError::Malformed` - 세그먼트/base64/JSON 오류, 필수 클레임 누락, 알 수 없는 역할
    /// * `TokenError::Expired` - `now > exp`
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| classify(token, e.into()))?;

        if self.clock.now().timestamp() > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// [`decode`](Self::decode) 후 토큰 용도까지 확인합니다.
    pub fn decode_kind(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, TokenError> {
        let claims = self.decode(token)?;
        if claims.token_type != kind {
            return Err(TokenError::WrongKind);
        }
        Ok(claims)
    }

    /// 검증 결과를 bool로 반환하고 실패 사유는 로그로 남깁니다.
    pub fn validate(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(_) => true,
            Err(e) => {
                log_failure(&e);
                false
            }
        }
    }

    /// 헤더 값에서 `Bearer ` 접두사를 제거합니다. 접두사 없는 토큰은 받지 않습니다.
    pub fn strip_scheme(header_value: &str) -> Result<&str, TokenError> {
        match header_value.strip_prefix(BEARER_PREFIX) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(TokenError::NotFound),
        }
    }

    pub fn with_scheme(token: &str) -> String {
        format!("{}{}", BEARER_PREFIX, token)
    }
}

/// 실패 사유를 로그로 남깁니다.
pub fn log_failure(err: &TokenError) {
    match err {
        TokenError::Expired => log::info!("{}", err),
        TokenError::NotFound => log::debug!("{}", err),
        _ => log::error!("{}", err),
    }
}

/// 헤더 JSON 파싱 단계에서 실패한 경우 `alg` 값이 HS256이 아니면 Unsupported로 분류합니다.
/// jsonwebtoken은 `none` 같은 알 수 없는 알고리즘 이름을 헤더 파싱 오류로 처리하기 때문입니다.
fn classify(token: &str, err: TokenError) -> TokenError {
    if err != TokenError::Malformed {
        return err;
    }

    match header_algorithm(token) {
        Some(alg) if alg != "HS256" => TokenError::Unsupported,
        _ => err,
    }
}

fn header_algorithm(token: &str) -> Option<String> {
    let header = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(header).ok()?;
    let value: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    value.get("alg")?.as_str().map(str::to_string)
}
