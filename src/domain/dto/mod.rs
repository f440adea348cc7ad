//! HTTP 요청/응답 DTO

mod auth;
mod members;

pub use auth::*;
pub use members::*;
