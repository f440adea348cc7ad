//! 비즈니스 로직을 담당하는 서비스 계층 모듈

pub mod auth;
pub mod members;
