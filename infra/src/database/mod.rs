//! Database connection management and repository implementations.

pub mod connection;
pub mod mysql;
