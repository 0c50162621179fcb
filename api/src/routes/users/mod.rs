//! User registration endpoints.

pub mod register;

pub use register::AppState;
