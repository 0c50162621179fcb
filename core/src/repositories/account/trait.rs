//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and keeps the domain layer independent of the
//! storage engine. Implementations must enforce email uniqueness at the
//! storage level (unique index or equivalent) and surface a violation as
//! `DomainError::DuplicateEmail`; the registration service's own
//! `exists_by_email` check is only a fast path and is subject to a
//! check-then-act race under concurrent registrations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Check whether an account exists with the given email.
    ///
    /// Comparison is a case-sensitive exact match.
    ///
    /// # Returns
    /// * `Ok(true)` - an account with this email exists
    /// * `Ok(false)` - the email is free
    /// * `Err(DomainError)` - storage error
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new account together with its phones.
    ///
    /// # Returns
    /// * `Ok(Account)` - the stored account
    /// * `Err(DomainError::DuplicateEmail)` - the unique email constraint
    ///   rejected the insert
    /// * `Err(DomainError)` - any other storage error
    async fn save(&self, account: Account) -> Result<Account, DomainError>;

    /// Find an account by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - account found, phones loaded in stored order
    /// * `Ok(None)` - no account with this id
    /// * `Err(DomainError)` - storage error
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;
}
