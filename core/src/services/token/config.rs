//! Configuration for the token service

use reg_shared::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric JWT signing secret
    pub secret: String,
    /// Token lifetime in seconds
    pub expiration_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            expiration_seconds: 86400,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            expiration_seconds: config.expiration_seconds,
        }
    }
}
