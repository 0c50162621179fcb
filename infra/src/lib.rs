//! # User Registry Infrastructure
//!
//! Concrete persistence for the user registry backend: a MySQL
//! implementation of the account repository via SQLx, plus the connection
//! pool factory. The `migrations/` directory at the crate root carries the
//! schema, including the unique email index the registration pipeline
//! relies on.

pub mod database;

pub use database::connection::create_pool;
pub use database::mysql::MySqlAccountRepository;
