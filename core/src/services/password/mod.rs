//! Credential hashing service.

pub mod hasher;

pub use hasher::PasswordHasher;
