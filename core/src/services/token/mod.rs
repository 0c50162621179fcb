//! JWT token issuance service.

pub mod config;
pub mod service;

pub use config::TokenServiceConfig;
pub use service::{Claims, TokenService, ROLE_USER};
