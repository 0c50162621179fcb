//! Registration request and response DTOs.
//!
//! Wire field names follow the original public contract: `citycode`,
//! `contrycode` (sic — the misspelling is part of the wire format and must
//! not be silently fixed), `last_login`, and `isactive`. Internal names
//! stay conventional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use reg_core::domain::value_objects::{AccountView, NewPhone, NewRegistration};

/// Phone entry as it travels on the wire, in both directions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhoneDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "El número de teléfono es requerido"))]
    pub number: String,

    #[serde(default, rename = "citycode")]
    #[validate(length(min = 1, message = "El código de ciudad es requerido"))]
    pub city_code: String,

    #[serde(default, rename = "contrycode")]
    #[validate(length(min = 1, message = "El código de país es requerido"))]
    pub country_code: String,
}

/// Inbound registration request.
///
/// Every field defaults on deserialization, so an absent key arrives
/// empty and the presence validators answer with the per-field contract
/// message; the generic malformed-body message is reserved for input
/// that is not valid JSON at all.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "El correo es requerido"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "La contraseña es requerida"))]
    pub password: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Al menos un teléfono es requerido"),
        nested
    )]
    pub phones: Vec<PhoneDto>,
}

impl RegisterUserRequest {
    /// Convert into the domain registration command
    pub fn into_command(self) -> NewRegistration {
        NewRegistration {
            name: self.name,
            email: self.email,
            password: self.password,
            phones: self
                .phones
                .into_iter()
                .map(|phone| NewPhone {
                    number: phone.number,
                    city_code: phone.city_code,
                    country_code: phone.country_code,
                })
                .collect(),
        }
    }
}

/// Outward representation of a registered account.
///
/// There is no password or hash field here by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub token: String,
    #[serde(rename = "isactive")]
    pub is_active: bool,
    pub phones: Vec<PhoneDto>,
}

impl From<AccountView> for RegisterUserResponse {
    fn from(view: AccountView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            email: view.email,
            created: view.created,
            modified: view.modified,
            last_login: view.last_login,
            token: view.token,
            is_active: view.is_active,
            phones: view
                .phones
                .into_iter()
                .map(|phone| PhoneDto {
                    number: phone.number,
                    city_code: phone.city_code,
                    country_code: phone.country_code,
                })
                .collect(),
        }
    }
}
