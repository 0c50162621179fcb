//! Business services containing domain logic and use cases.

pub mod password;
pub mod registration;
pub mod token;
pub mod validation;

// Re-export commonly used types
pub use password::PasswordHasher;
pub use registration::RegistrationService;
pub use token::{Claims, TokenService, TokenServiceConfig};
pub use validation::{EmailValidator, PasswordValidator, PASSWORD_MAX_LENGTH};
