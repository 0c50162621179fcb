//! Mock repositories for registration service tests

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;
use crate::repositories::AccountRepository;

/// Repository whose advisory check reports the email as free while the
/// insert still hits the unique constraint, reproducing two concurrent
/// registrations racing past the check.
pub struct RacingAccountRepository;

#[async_trait]
impl AccountRepository for RacingAccountRepository {
    async fn exists_by_email(&self, _email: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn save(&self, _account: Account) -> Result<Account, DomainError> {
        Err(DomainError::DuplicateEmail)
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, DomainError> {
        Ok(None)
    }
}

/// Repository whose insert fails outright, for the no-partial-commit path
pub struct FailingAccountRepository;

#[async_trait]
impl AccountRepository for FailingAccountRepository {
    async fn exists_by_email(&self, _email: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn save(&self, _account: Account) -> Result<Account, DomainError> {
        Err(DomainError::Database("connection reset".to_string()))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, DomainError> {
        Ok(None)
    }
}
