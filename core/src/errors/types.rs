//! Leaf error types for token issuance and input validation.

use thiserror::Error;

/// Token-related errors.
///
/// A missing or unusable signing key is a configuration fault: it is not
/// caller-correctable and must be loud in operational logs.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signing key is missing or empty")]
    MissingSigningKey,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,
}

/// Validator configuration errors.
///
/// A pattern that does not compile is a configuration fault like a
/// missing signing key: it fails startup, never a request.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid validation pattern: {pattern}")]
    InvalidPattern { pattern: String },
}
