//! Shared configuration types for the user registry backend
//!
//! This crate provides the configuration structures used across the server
//! modules: JWT signing, validation patterns, database connection, and the
//! HTTP server itself. Everything is loadable from environment variables
//! with sensible development defaults.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, JwtConfig, ServerConfig, ValidationConfig};
