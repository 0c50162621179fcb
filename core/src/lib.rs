//! # User Registry Core
//!
//! Core business logic and domain layer for the user registry backend.
//! This crate contains the account aggregate, the registration service,
//! repository interfaces, validators, credential hashing, token issuance,
//! and the domain error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
