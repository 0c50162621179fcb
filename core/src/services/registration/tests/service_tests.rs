//! Registration service behavior tests

use std::sync::Arc;

use crate::domain::value_objects::{NewPhone, NewRegistration};
use crate::errors::DomainError;
use crate::repositories::{AccountRepository, MockAccountRepository};
use crate::services::password::PasswordHasher;
use crate::services::registration::RegistrationService;
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::{FailingAccountRepository, RacingAccountRepository};

// bcrypt's minimum cost factor, keeps the work factor out of the test runtime
const TEST_COST: u32 = 4;

fn token_service() -> Arc<TokenService> {
    Arc::new(
        TokenService::new(TokenServiceConfig {
            secret: "registration-test-secret".to_string(),
            expiration_seconds: 3600,
        })
        .unwrap(),
    )
}

fn service<R: AccountRepository>(repository: Arc<R>) -> RegistrationService<R> {
    RegistrationService::new(
        repository,
        PasswordHasher::with_cost(TEST_COST),
        token_service(),
    )
}

fn juan() -> NewRegistration {
    NewRegistration {
        name: "Juan Rodriguez".to_string(),
        email: "juan@rodriguez.org".to_string(),
        password: "SecurePass123".to_string(),
        phones: vec![NewPhone {
            number: "1234567".to_string(),
            city_code: "1".to_string(),
            country_code: "57".to_string(),
        }],
    }
}

#[tokio::test]
async fn test_register_returns_view_matching_input() {
    let repository = Arc::new(MockAccountRepository::new());
    let view = service(repository.clone()).register(juan()).await.unwrap();

    assert_eq!(view.name, "Juan Rodriguez");
    assert_eq!(view.email, "juan@rodriguez.org");
    assert!(view.is_active);
    assert_eq!(view.phones.len(), 1);
    assert_eq!(view.phones[0].number, "1234567");
    assert_eq!(view.phones[0].city_code, "1");
    assert_eq!(view.phones[0].country_code, "57");
    assert_eq!(view.token.split('.').count(), 3);
    assert_eq!(view.created, view.modified);
    assert_eq!(view.created, view.last_login);
}

#[tokio::test]
async fn test_register_stores_hashed_credential() {
    let repository = Arc::new(MockAccountRepository::new());
    let hasher = PasswordHasher::with_cost(TEST_COST);
    let view = service(repository.clone()).register(juan()).await.unwrap();

    let stored = repository.find_by_id(view.id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "SecurePass123");
    assert!(hasher.verify("SecurePass123", &stored.password_hash).unwrap());
    assert_eq!(stored.token, view.token);
}

#[tokio::test]
async fn test_register_preserves_phone_order() {
    let repository = Arc::new(MockAccountRepository::new());
    let mut input = juan();
    input.phones = vec![
        NewPhone {
            number: "1111111".to_string(),
            city_code: "1".to_string(),
            country_code: "57".to_string(),
        },
        NewPhone {
            number: "2222222".to_string(),
            city_code: "2".to_string(),
            country_code: "56".to_string(),
        },
    ];

    let view = service(repository).register(input).await.unwrap();

    let numbers: Vec<&str> = view.phones.iter().map(|p| p.number.as_str()).collect();
    assert_eq!(numbers, vec!["1111111", "2222222"]);
}

#[tokio::test]
async fn test_duplicate_email_rejected_and_store_unaffected() {
    let repository = Arc::new(MockAccountRepository::new());
    let service = service(repository.clone());

    let first = service.register(juan()).await.unwrap();

    let mut second = juan();
    second.name = "Otro Nombre".to_string();
    let err = service.register(second).await.unwrap_err();
    assert!(matches!(err, DomainError::DuplicateEmail));

    // First registration is untouched by the rejected attempt
    assert_eq!(repository.len().await, 1);
    let stored = repository.find_by_id(first.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Juan Rodriguez");
}

#[tokio::test]
async fn test_storage_constraint_race_maps_to_duplicate_email() {
    // Both requests passed the advisory check; the unique index decides
    let err = service(Arc::new(RacingAccountRepository))
        .register(juan())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::DuplicateEmail));
}

#[tokio::test]
async fn test_persistence_failure_propagates() {
    let err = service(Arc::new(FailingAccountRepository))
        .register(juan())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Database(_)));
}

#[tokio::test]
async fn test_two_registrations_get_distinct_tokens_and_ids() {
    let repository = Arc::new(MockAccountRepository::new());
    let service = service(repository);

    let first = service.register(juan()).await.unwrap();

    let mut other = juan();
    other.email = "maria@rodriguez.org".to_string();
    let second = service.register(other).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.token, second.token);
}
