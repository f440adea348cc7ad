//! # Configuration Module
//!
//! 인증 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! - [`auth_config`]: JWT 토큰 수명과 서명 키 (필수값, 누락 시 기동 실패)
//! - [`data_config`]: 실행 환경, 서버 바인딩, 패스워드 해싱, Redis 연결

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
