//! Value objects exchanged with the registration service.

pub mod registration;

// Re-export commonly used types
pub use registration::{AccountView, NewPhone, NewRegistration, PhoneView};
