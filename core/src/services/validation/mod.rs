//! Field-level validators for registration input.
//!
//! Both validators are pure predicates over raw string input, parameterized
//! by externally supplied patterns (see `reg_shared::ValidationConfig`).
//! They check shape only: the email predicate is structural syntax, not
//! deliverability, and the password policy lives entirely in the configured
//! pattern. The 70-character password ceiling is an independent constraint,
//! re-exported here so callers enforce it alongside the pattern.

use regex::Regex;

use crate::errors::{DomainError, ValidationError};

pub use reg_shared::config::validation::PASSWORD_MAX_LENGTH;

/// Structural email validator backed by a configured pattern
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
}

impl EmailValidator {
    /// Compile the configured email pattern.
    ///
    /// An invalid pattern is a configuration fault and fails loudly at
    /// startup rather than at request time.
    pub fn new(pattern: &str) -> Result<Self, DomainError> {
        let pattern = Regex::new(pattern).map_err(|_| {
            DomainError::ValidationErr(ValidationError::InvalidPattern {
                pattern: pattern.to_string(),
            })
        })?;
        Ok(Self { pattern })
    }

    /// True iff the value is present and matches the configured pattern
    pub fn is_valid(&self, value: Option<&str>) -> bool {
        match value {
            None => false,
            Some(value) => self.pattern.is_match(value),
        }
    }
}

/// Password shape validator backed by a configured pattern
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    pattern: Regex,
}

impl PasswordValidator {
    /// Compile the configured password pattern
    pub fn new(pattern: &str) -> Result<Self, DomainError> {
        let pattern = Regex::new(pattern).map_err(|_| {
            DomainError::ValidationErr(ValidationError::InvalidPattern {
                pattern: pattern.to_string(),
            })
        })?;
        Ok(Self { pattern })
    }

    /// True iff the value is present and matches the configured pattern.
    ///
    /// The length ceiling is not part of the pattern; callers check
    /// `PASSWORD_MAX_LENGTH` separately.
    pub fn is_valid(&self, value: Option<&str>) -> bool {
        match value {
            None => false,
            Some(value) => self.pattern.is_match(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reg_shared::config::validation::{DEFAULT_EMAIL_PATTERN, DEFAULT_PASSWORD_PATTERN};

    #[test]
    fn test_email_validator_accepts_wellformed_addresses() {
        let validator = EmailValidator::new(DEFAULT_EMAIL_PATTERN).unwrap();

        assert!(validator.is_valid(Some("juan@rodriguez.org")));
        assert!(validator.is_valid(Some("a.b+c@dominio.cl")));
    }

    #[test]
    fn test_email_validator_rejects_malformed_addresses() {
        let validator = EmailValidator::new(DEFAULT_EMAIL_PATTERN).unwrap();

        assert!(!validator.is_valid(None));
        assert!(!validator.is_valid(Some("")));
        assert!(!validator.is_valid(Some("not-an-email")));
        assert!(!validator.is_valid(Some("juan@rodriguez")));
        assert!(!validator.is_valid(Some("@rodriguez.org")));
    }

    #[test]
    fn test_email_validator_honors_custom_pattern() {
        // Operators can restrict registration to a single domain
        let validator = EmailValidator::new(r"^[a-z]+@empresa\.cl$").unwrap();

        assert!(validator.is_valid(Some("juan@empresa.cl")));
        assert!(!validator.is_valid(Some("juan@rodriguez.org")));
    }

    #[test]
    fn test_password_validator_default_pattern() {
        let validator = PasswordValidator::new(DEFAULT_PASSWORD_PATTERN).unwrap();

        assert!(validator.is_valid(Some("SecurePass123")));
        assert!(!validator.is_valid(Some("short1A")));
        assert!(!validator.is_valid(None));
        assert!(!validator.is_valid(Some("")));
    }

    #[test]
    fn test_password_length_ceiling_is_separate() {
        let validator = PasswordValidator::new(DEFAULT_PASSWORD_PATTERN).unwrap();
        let long = "A1".repeat(50);

        // The pattern alone does not cap length; the ceiling is enforced
        // by callers against PASSWORD_MAX_LENGTH.
        assert!(validator.is_valid(Some(&long)));
        assert!(long.chars().count() > PASSWORD_MAX_LENGTH);
    }

    #[test]
    fn test_invalid_pattern_is_a_configuration_fault() {
        assert!(EmailValidator::new("([unclosed").is_err());
        assert!(PasswordValidator::new("([unclosed").is_err());
    }
}
