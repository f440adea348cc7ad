//! 공통 유틸리티 모듈
//!
//! # Modules
//!
//! - [`clock`] - 현재 시각 공급자 (토큰 만료와 저장소 TTL의 기준)
//! - [`cookie`] - 리프레시 토큰 쿠키 생성/해석

pub mod clock;
pub mod cookie;
