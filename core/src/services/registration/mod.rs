//! Account registration service.

pub mod service;

pub use service::RegistrationService;

#[cfg(test)]
mod tests;
