use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::dto::user::{RegisterUserRequest, RegisterUserResponse};
use crate::handlers::error::{first_validation_message, handle_domain_error};

use reg_core::errors::DomainError;
use reg_core::repositories::AccountRepository;
use reg_core::services::registration::RegistrationService;
use reg_core::services::validation::{EmailValidator, PasswordValidator, PASSWORD_MAX_LENGTH};

/// Application state that holds shared services
pub struct AppState<R: AccountRepository> {
    pub registration_service: Arc<RegistrationService<R>>,
    pub email_validator: EmailValidator,
    pub password_validator: PasswordValidator,
}

/// Handler for POST /api/users
///
/// Registers a new user account. All field-level validation happens here,
/// before the registration service is invoked; the first offending field's
/// message is returned.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Juan Rodriguez",
///     "email": "juan@rodriguez.org",
///     "password": "SecurePass123",
///     "phones": [{"number": "1234567", "citycode": "1", "contrycode": "57"}]
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "Juan Rodriguez",
///     "email": "juan@rodriguez.org",
///     "created": "2025-01-01T00:00:00Z",
///     "modified": "2025-01-01T00:00:00Z",
///     "last_login": "2025-01-01T00:00:00Z",
///     "token": "eyJhbGciOiJIUzI1NiIs...",
///     "isactive": true,
///     "phones": [{"number": "1234567", "citycode": "1", "contrycode": "57"}]
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: validation failure or duplicate email, `{"mensaje": ...}`
/// - 500 Internal Server Error: configuration or storage failure
pub async fn register<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<RegisterUserRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    let request = request.into_inner();

    // Presence constraints on the parsed structure
    if let Err(errors) = request.validate() {
        return handle_domain_error(DomainError::Validation {
            message: first_validation_message(&errors),
        });
    }

    // Pattern constraints, driven by configured patterns
    if !state.email_validator.is_valid(Some(&request.email)) {
        return handle_domain_error(DomainError::Validation {
            message: "Formato de correo inválido".to_string(),
        });
    }
    if !state.password_validator.is_valid(Some(&request.password)) {
        return handle_domain_error(DomainError::Validation {
            message: "Formato de contraseña inválido".to_string(),
        });
    }

    // Length ceiling, independent of the pattern
    if request.password.chars().count() > PASSWORD_MAX_LENGTH {
        return handle_domain_error(DomainError::Validation {
            message: "La contraseña no debe exceder los 70 caracteres".to_string(),
        });
    }

    match state
        .registration_service
        .register(request.into_command())
        .await
    {
        Ok(view) => HttpResponse::Created().json(RegisterUserResponse::from(view)),
        Err(error) => handle_domain_error(error),
    }
}
