//! 회원 데이터 액세스 계층
//!
//! 영속성 스키마는 이 서비스의 관심사가 아니므로 프로세스 메모리에 보관합니다.

pub mod member_repo;

pub use member_repo::*;
