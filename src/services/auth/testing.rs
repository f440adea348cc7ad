//! 인증 서비스 테스트 픽스처
//!
//! 액세스 토큰 10초, 리프레시 토큰 100초, 수동 시계, 메모리 저장소로 구성됩니다.
//! `alice`(USER)와 `admin01`(ADMIN)이 [`PASSWORD`]로 가입되어 있습니다.

use std::sync::Arc;

use crate::caching::MemoryRevocationStore;
use crate::config::JwtConfig;
use crate::domain::entities::MemberRole;
use crate::repositories::members::MemberRepository;
use crate::repositories::tokens::TokenRepository;
use crate::services::auth::{AuthService, TokenCodec};
use crate::services::members::MemberService;
use crate::utils::clock::ManualClock;

pub const PASSWORD: &str = "password12";
const SECRET: &str = "kVh4tD6YvLv87AT2PWZ2jLBSdt4hNp9eyF4sPX1lSQo=";

pub struct Fixture {
    pub clock: Arc<ManualClock>,
    pub store: Arc<MemoryRevocationStore>,
    pub members: Arc<MemberService>,
    pub auth: Arc<AuthService>,
}

fn jwt_config() -> JwtConfig {
    JwtConfig::new(10_000, 100_000, SECRET).unwrap()
}

pub fn fixture() -> Fixture {
    let clock = Arc::new(ManualClock::fixed());
    let store = Arc::new(MemoryRevocationStore::new(clock.clone()));
    let codec = Arc::new(TokenCodec::new(jwt_config(), clock.clone()));

    let members = Arc::new(MemberService::new(Arc::new(MemberRepository::new()), 4).unwrap());
    members.create_member("alice", PASSWORD, MemberRole::User).unwrap();
    members.create_member("admin01", PASSWORD, MemberRole::Admin).unwrap();

    let auth = Arc::new(AuthService::new(
        codec.clone(),
        TokenRepository::new(store.clone()),
        members.clone(),
    ));

    Fixture {
        clock,
        store,
        members,
        auth,
    }
}
