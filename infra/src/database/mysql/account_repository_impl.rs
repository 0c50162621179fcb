//! MySQL implementation of the AccountRepository trait.
//!
//! Accounts and their phones are written inside a single transaction. The
//! `email` column carries a unique index with a binary collation, so the
//! store is the authoritative enforcer of the one-account-per-email
//! invariant; a duplicate-key rejection is translated into
//! `DomainError::DuplicateEmail` regardless of how the advisory in-service
//! check fared.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use reg_core::domain::entities::account::{Account, Phone};
use reg_core::errors::DomainError;
use reg_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row plus its phone rows to an Account entity
    fn row_to_account(
        row: &sqlx::mysql::MySqlRow,
        phones: Vec<Phone>,
    ) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database(format!("Failed to get password_hash: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            modified_at: row
                .try_get::<DateTime<Utc>, _>("modified_at")
                .map_err(|e| DomainError::Database(format!("Failed to get modified_at: {}", e)))?,
            last_login_at: row
                .try_get::<DateTime<Utc>, _>("last_login_at")
                .map_err(|e| DomainError::Database(format!("Failed to get last_login_at: {}", e)))?,
            token: row
                .try_get("token")
                .map_err(|e| DomainError::Database(format!("Failed to get token: {}", e)))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| DomainError::Database(format!("Failed to get is_active: {}", e)))?,
            phones,
        })
    }

    /// Load the phones of an account in stored order
    async fn load_phones(&self, account_id: Uuid) -> Result<Vec<Phone>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT number, city_code, country_code
            FROM phones
            WHERE account_id = ?
            ORDER BY position
            "#,
        )
        .bind(account_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Database(format!("Phone query failed: {}", e)))?;

        rows.iter()
            .map(|row| {
                Ok(Phone {
                    number: row
                        .try_get("number")
                        .map_err(|e| DomainError::Database(format!("Failed to get number: {}", e)))?,
                    city_code: row.try_get("city_code").map_err(|e| {
                        DomainError::Database(format!("Failed to get city_code: {}", e))
                    })?,
                    country_code: row.try_get("country_code").map_err(|e| {
                        DomainError::Database(format!("Failed to get country_code: {}", e))
                    })?,
                })
            })
            .collect()
    }

    /// Translate a SQLx error from an insert, surfacing unique-index
    /// rejections as the duplicate-email domain error
    fn map_insert_error(e: sqlx::Error) -> DomainError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return DomainError::DuplicateEmail;
            }
        }
        DomainError::Database(format!("Insert failed: {}", e))
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        Ok(row.is_some())
    }

    async fn save(&self, account: Account) -> Result<Account, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO users
                (id, name, email, password_hash, created_at, modified_at,
                 last_login_at, token, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(account.id.to_string())
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .bind(account.modified_at)
        .bind(account.last_login_at)
        .bind(&account.token)
        .bind(account.is_active)
        .execute(&mut *tx)
        .await
        .map_err(Self::map_insert_error)?;

        for (position, phone) in account.phones.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO phones (account_id, position, number, city_code, country_code)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(account.id.to_string())
            .bind(position as u32)
            .bind(&phone.number)
            .bind(&phone.city_code)
            .bind(&phone.country_code)
            .execute(&mut *tx)
            .await
            .map_err(Self::map_insert_error)?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to commit transaction: {}", e)))?;

        tracing::debug!(account_id = %account.id, "Account persisted");
        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, created_at, modified_at,
                   last_login_at, token, is_active
            FROM users
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match row {
            Some(row) => {
                let phones = self.load_phones(id).await?;
                Ok(Some(Self::row_to_account(&row, phones)?))
            }
            None => Ok(None),
        }
    }
}
