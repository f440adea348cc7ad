pub mod principal;
pub mod authentication_request;

pub use principal::*;
pub use authentication_request::*;
