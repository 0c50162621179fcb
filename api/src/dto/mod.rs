//! Request and response data transfer objects.

pub mod error;
pub mod user;

pub use error::ErrorResponse;
pub use user::{PhoneDto, RegisterUserRequest, RegisterUserResponse};
