//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing key and token lifetime
//! - `database` - Database connection and pool configuration
//! - `server` - HTTP server bind configuration
//! - `validation` - Email and password pattern configuration

pub mod auth;
pub mod database;
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use validation::ValidationConfig;
