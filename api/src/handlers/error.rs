//! Domain error to HTTP response mapping.
//!
//! Validation failures and duplicate emails are expected,
//! caller-correctable conditions and map to 400 with their contract
//! message. Everything else is a server fault: logged in full here,
//! reported to the caller only as an opaque internal-error message.

use actix_web::HttpResponse;
use validator::{ValidationErrors, ValidationErrorsKind};

use reg_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Generic message for faults the caller cannot correct
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Fallback when a field validation carries no message
pub const VALIDATION_FALLBACK_MESSAGE: &str = "Validación fallida";

/// Convert a domain error into the contract HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        DomainError::DuplicateEmail => {
            HttpResponse::BadRequest().json(ErrorResponse::new("El correo ya registrado"))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorResponse::new("Recurso no encontrado"))
        }
        other => {
            log::error!("Internal error handling request: {:?}", other);
            HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE))
        }
    }
}

/// Field order for reporting, so the message is stable when several
/// fields are invalid at once. The error map itself iterates in hash
/// order.
const FIELD_PRIORITY: [&str; 7] = [
    "name",
    "email",
    "password",
    "phones",
    "number",
    "city_code",
    "country_code",
];

/// Extract the first offending field's message from derive-based
/// validation, descending into nested and list errors
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    message_from_errors(errors).unwrap_or_else(|| VALIDATION_FALLBACK_MESSAGE.to_string())
}

fn message_from_errors(errors: &ValidationErrors) -> Option<String> {
    let map = errors.errors();

    for field in FIELD_PRIORITY {
        if let Some(message) = map.get(field).and_then(message_from_kind) {
            return Some(message);
        }
    }
    // Fields outside the known order still get reported
    map.values().find_map(message_from_kind)
}

fn message_from_kind(kind: &ValidationErrorsKind) -> Option<String> {
    match kind {
        ValidationErrorsKind::Field(field_errors) => field_errors
            .first()
            .and_then(|e| e.message.as_ref())
            .map(|message| message.to_string()),
        ValidationErrorsKind::Struct(nested) => message_from_errors(nested),
        ValidationErrorsKind::List(items) => {
            // BTreeMap keyed by index, so the lowest entry comes first
            items.values().next().and_then(|nested| message_from_errors(nested))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "El nombre es requerido"))]
        name: String,
    }

    #[derive(Validate)]
    struct MultiField {
        #[validate(length(min = 1, message = "El nombre es requerido"))]
        name: String,
        #[validate(length(min = 1, message = "El correo es requerido"))]
        email: String,
        #[validate(length(min = 1, message = "La contraseña es requerida"))]
        password: String,
    }

    #[test]
    fn test_first_validation_message_reads_field_message() {
        let errors = Sample {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(first_validation_message(&errors), "El nombre es requerido");
    }

    #[test]
    fn test_message_order_is_stable_with_several_invalid_fields() {
        // Each validate() builds a fresh error map with its own hash
        // seed; the reported field must not depend on it
        for _ in 0..16 {
            let errors = MultiField {
                name: String::new(),
                email: String::new(),
                password: String::new(),
            }
            .validate()
            .unwrap_err();

            assert_eq!(first_validation_message(&errors), "El nombre es requerido");
        }
    }
}
