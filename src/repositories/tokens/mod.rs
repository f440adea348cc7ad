//! 토큰 저장 리포지토리 모듈
//!
//! 폐기 저장소 위에 키 규칙을 정의합니다.
//!
//! | 키 | 값 | TTL | 쓰기 | 삭제 |
//! |----|----|-----|------|------|
//! | `refresh:<username>` | 리프레시 토큰 | 리프레시 토큰 수명 | 로그인, 재발급 | 로그아웃 |
//! | `revoked:<username>` | 로그아웃된 액세스 토큰 | 액세스 토큰의 남은 수명 + 1초 | 로그아웃 | TTL 만료 |

pub mod token_repository;

pub use token_repository::*;
