//! Account entity representing a registered user account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Phone record owned by exactly one account.
///
/// Phones have no identity of their own outside their account; they are
/// stored inline on the aggregate and live and die with it. The storage
/// layer keys them with a plain `account_id` column, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Phone number
    pub number: String,

    /// City code
    pub city_code: String,

    /// Country code
    pub country_code: String,
}

impl Phone {
    /// Creates a new phone record
    pub fn new(
        number: impl Into<String>,
        city_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            city_code: city_code.into(),
            country_code: country_code.into(),
        }
    }
}

/// Account aggregate root produced by registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, generated at creation and immutable thereafter
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, unique across all accounts (case-sensitive exact match)
    pub email: String,

    /// Salted one-way hash of the submitted password. Never serialized
    /// outward; the response projection has no field for it.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last modification
    pub modified_at: DateTime<Utc>,

    /// Timestamp of the last login
    pub last_login_at: DateTime<Utc>,

    /// Most recently issued authentication token
    pub token: String,

    /// Whether the account is active
    pub is_active: bool,

    /// Owned phone records, order-preserving, at least one
    pub phones: Vec<Phone>,
}

impl Account {
    /// Creates a new account.
    ///
    /// The three timestamps are set to the same instant and the account
    /// starts active. Repositories persist these values verbatim.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        token: impl Into<String>,
        phones: Vec<Phone>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
            modified_at: now,
            last_login_at: now,
            token: token.into(),
            is_active: true,
            phones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_phones() -> Vec<Phone> {
        vec![Phone::new("1234567", "1", "57")]
    }

    #[test]
    fn test_new_account_creation() {
        let account = Account::new(
            "Juan Rodriguez",
            "juan@rodriguez.org",
            "$2b$12$hash",
            "header.payload.signature",
            sample_phones(),
        );

        assert_eq!(account.name, "Juan Rodriguez");
        assert_eq!(account.email, "juan@rodriguez.org");
        assert!(account.is_active);
        assert_eq!(account.phones.len(), 1);
        assert_eq!(account.phones[0].number, "1234567");
    }

    #[test]
    fn test_timestamps_equal_at_creation() {
        let account = Account::new(
            "Juan Rodriguez",
            "juan@rodriguez.org",
            "$2b$12$hash",
            "token",
            sample_phones(),
        );

        assert_eq!(account.created_at, account.modified_at);
        assert_eq!(account.created_at, account.last_login_at);
    }

    #[test]
    fn test_phone_order_preserved() {
        let phones = vec![
            Phone::new("1111111", "1", "57"),
            Phone::new("2222222", "2", "56"),
            Phone::new("3333333", "3", "54"),
        ];
        let account = Account::new("n", "e@x.org", "h", "t", phones);

        let numbers: Vec<&str> = account.phones.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, vec!["1111111", "2222222", "3333333"]);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let account = Account::new(
            "Juan Rodriguez",
            "juan@rodriguez.org",
            "$2b$12$super-secret-hash",
            "token",
            sample_phones(),
        );

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password_hash"));
    }
}
