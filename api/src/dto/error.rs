//! Failure response body.
//!
//! Every failure, whatever its cause, answers with the same single-field
//! shape; the `mensaje` key is part of the public contract.

use serde::{Deserialize, Serialize};

/// Failure response carrying a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub mensaje: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
        }
    }
}
