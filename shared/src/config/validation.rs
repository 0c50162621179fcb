//! Validation pattern configuration
//!
//! The email and password shape rules are plain regex patterns supplied at
//! startup, so operators can tune strictness without a code change. The
//! password length ceiling is an independent constraint and is not part of
//! the pattern.

use serde::{Deserialize, Serialize};

/// Maximum accepted password length in characters
pub const PASSWORD_MAX_LENGTH: usize = 70;

/// Default email pattern: structural syntax check only, not deliverability
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Default password pattern: at least 8 characters drawn from letters,
/// digits, and common punctuation. The pattern is compiled with the `regex`
/// crate, which has no look-around, so character-class composition rules
/// (one uppercase, one digit, ...) must be written out explicitly when
/// configured.
pub const DEFAULT_PASSWORD_PATTERN: &str = r"^[A-Za-z0-9@#$%^&+=!*._-]{8,}$";

/// Patterns driving field-level validation of registration requests
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Regex the submitted email must match
    pub email_pattern: String,

    /// Regex the submitted password must match
    pub password_pattern: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            password_pattern: DEFAULT_PASSWORD_PATTERN.to_string(),
        }
    }
}

impl ValidationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let email_pattern = std::env::var("VALIDATION_EMAIL_PATTERN")
            .unwrap_or_else(|_| DEFAULT_EMAIL_PATTERN.to_string());
        let password_pattern = std::env::var("VALIDATION_PASSWORD_PATTERN")
            .unwrap_or_else(|_| DEFAULT_PASSWORD_PATTERN.to_string());

        Self {
            email_pattern,
            password_pattern,
        }
    }
}
