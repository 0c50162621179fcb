//! Registration orchestration.
//!
//! Single entry point for creating accounts: uniqueness check, token
//! issuance, credential hashing, entity construction, persistence, and
//! the outward projection, in that order. No partial-failure recovery: if
//! persistence fails after token issuance the whole operation fails and
//! nothing is committed.

use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::{AccountView, NewRegistration};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Service orchestrating the registration pipeline
pub struct RegistrationService<R: AccountRepository> {
    repository: Arc<R>,
    hasher: PasswordHasher,
    token_service: Arc<TokenService>,
}

impl<R: AccountRepository> RegistrationService<R> {
    /// Create a new registration service
    pub fn new(repository: Arc<R>, hasher: PasswordHasher, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            hasher,
            token_service,
        }
    }

    /// Register a new account.
    ///
    /// The input has already passed field-level validation. Steps:
    ///
    /// 1. Uniqueness fast path: `exists_by_email`. This check-then-insert
    ///    is racy under concurrent registrations of the same email; the
    ///    repository's unique constraint is the authoritative guard and
    ///    also surfaces as `DuplicateEmail` from `save`.
    /// 2. Issue the signed token for the email.
    /// 3. Hash the credential with a fresh salt.
    /// 4. Build the account, copying phones from the input in order.
    /// 5. Persist.
    /// 6. Project into the outward view, which never carries the hash.
    pub async fn register(&self, input: NewRegistration) -> DomainResult<AccountView> {
        if self.repository.exists_by_email(&input.email).await? {
            tracing::warn!(email = %input.email, "Registration rejected: email already taken");
            return Err(DomainError::DuplicateEmail);
        }

        let token = self.token_service.issue(&input.email)?;
        let password_hash = self.hasher.hash(&input.password)?;

        let phones = input.phones.iter().map(|p| p.to_phone()).collect();
        let account = Account::new(input.name, input.email, password_hash, token, phones);

        let stored = self.repository.save(account).await?;
        tracing::info!(account_id = %stored.id, "Account registered");

        Ok(AccountView::from(stored))
    }
}
