//! Registration command and response value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::{Account, Phone};

/// Phone data submitted with a registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPhone {
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

/// Command describing a registration request, already past field-level
/// validation by the time it reaches the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phones: Vec<NewPhone>,
}

/// Phone projection in the outward account representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneView {
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

/// Outward projection of a stored account.
///
/// Every account field is carried over except the credential hash, which
/// has no counterpart here at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub token: String,
    pub is_active: bool,
    pub phones: Vec<PhoneView>,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            created: account.created_at,
            modified: account.modified_at,
            last_login: account.last_login_at,
            token: account.token,
            is_active: account.is_active,
            phones: account
                .phones
                .into_iter()
                .map(|phone| PhoneView {
                    number: phone.number,
                    city_code: phone.city_code,
                    country_code: phone.country_code,
                })
                .collect(),
        }
    }
}

impl NewPhone {
    /// Copy into an owned phone record for the account under construction
    pub fn to_phone(&self) -> Phone {
        Phone::new(
            self.number.clone(),
            self.city_code.clone(),
            self.country_code.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_omits_credential_hash() {
        let account = Account::new(
            "Juan Rodriguez",
            "juan@rodriguez.org",
            "$2b$12$secret",
            "a.b.c",
            vec![Phone::new("1234567", "1", "57")],
        );
        let created_at = account.created_at;

        let view = AccountView::from(account);

        assert_eq!(view.name, "Juan Rodriguez");
        assert_eq!(view.email, "juan@rodriguez.org");
        assert_eq!(view.created, created_at);
        assert_eq!(view.modified, created_at);
        assert_eq!(view.last_login, created_at);
        assert!(view.is_active);
        assert_eq!(view.phones.len(), 1);
        assert_eq!(view.phones[0].country_code, "57");

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("secret"));
    }
}
