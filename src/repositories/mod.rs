//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::tokens::TokenRepository;
//!
//! let token_repo = TokenRepository::new(store);
//! token_repo.store_refresh_token("alice", &refresh_token, 86_400).await?;
//! ```

pub mod members;
pub mod tokens;
