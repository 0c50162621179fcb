//! One-way password hashing with per-call randomized salts.
//!
//! Backed by bcrypt: the salt and cost factor are embedded in the digest,
//! so verification needs no external state and two hashes of the same
//! input always differ. There is no fixed salt and no secret key anywhere
//! in this transform.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::DomainError;

/// Password hashing service
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the default bcrypt cost factor
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a hasher with an explicit cost factor.
    ///
    /// Lower costs are useful in tests; production should stay at the
    /// default or above.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a raw password with a freshly generated salt.
    ///
    /// Accepts empty strings and arbitrary printable input, including
    /// multi-byte text, up to the 70-character request ceiling (bcrypt's
    /// own 72-byte limit sits above it).
    pub fn hash(&self, raw: &str) -> Result<String, DomainError> {
        hash(raw, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// True iff `raw` is the password that produced `digest`.
    ///
    /// Case-sensitive; the salt is read back out of the digest itself.
    pub fn verify(&self, raw: &str, digest: &str) -> Result<bool, DomainError> {
        verify(raw, digest).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
