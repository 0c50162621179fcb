//! Domain entities representing core business objects.

pub mod account;

// Re-export commonly used types
pub use account::{Account, Phone};
