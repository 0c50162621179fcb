//! Token issuance implementation.
//!
//! Issues compact three-segment HS256 tokens asserting the identity of a
//! newly registered subject. Verification past issuance (expiry
//! enforcement, revocation) is a consumer-side concern; `decode` exists so
//! future verifiers and the tests share the same key handling.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Role claim value assigned to every registered account
pub const ROLE_USER: &str = "user";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the account email)
    pub sub: String,

    /// Role claim, always [`ROLE_USER`]
    pub rol: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (issued-at plus the configured lifetime)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a subject with the given lifetime
    pub fn new(subject: impl Into<String>, lifetime_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(lifetime_seconds);

        Self {
            sub: subject.into(),
            rol: ROLE_USER.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }
}

/// Service issuing signed identity assertions for registered accounts
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance.
    ///
    /// Fails if the signing secret is blank: that is a configuration
    /// fault, not something a caller can correct.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.secret.trim().is_empty() {
            return Err(DomainError::Token(TokenError::MissingSigningKey));
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed token for the given subject email.
    ///
    /// The result is three dot-separated segments. Two calls for the same
    /// subject are not required to produce identical tokens, as the
    /// issued-at timestamp moves.
    pub fn issue(&self, subject: &str) -> Result<String, DomainError> {
        let claims = Claims::new(subject, self.config.expiration_seconds);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::Token(TokenError::GenerationFailed(e.to_string())))?;

        tracing::debug!(subject = %subject, "Issued registration token");
        Ok(token)
    }

    /// Decodes and verifies a token issued with the same signing key
    pub fn decode(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    DomainError::Token(TokenError::InvalidSignature)
                }
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            }
        })?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig {
            secret: "unit-test-secret".to_string(),
            expiration_seconds: 3600,
        })
        .unwrap()
    }

    #[test]
    fn test_issued_token_has_three_segments() {
        let token = service().issue("juan@rodriguez.org").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_issued_token_carries_expected_claims() {
        let service = service();
        let token = service.issue("juan@rodriguez.org").unwrap();

        let claims = service.decode(&token).unwrap();
        assert_eq!(claims.sub, "juan@rodriguez.org");
        assert_eq!(claims.rol, ROLE_USER);
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_token_is_not_verifiable_with_other_key() {
        let issuer = service();
        let other = TokenService::new(TokenServiceConfig {
            secret: "a-different-secret".to_string(),
            expiration_seconds: 3600,
        })
        .unwrap();

        let token = issuer.issue("juan@rodriguez.org").unwrap();
        let err = other.decode(&token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_blank_secret_is_a_configuration_fault() {
        let result = TokenService::new(TokenServiceConfig {
            secret: "   ".to_string(),
            expiration_seconds: 3600,
        });

        let Err(err) = result else {
            panic!("blank secret must be rejected");
        };
        assert!(matches!(
            err,
            DomainError::Token(TokenError::MissingSigningKey)
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = service();
        let token = service.issue("juan@rodriguez.org").unwrap();

        let mut segments: Vec<&str> = token.split('.').collect();
        let forged_payload = segments[1].to_string() + "x";
        segments[1] = &forged_payload;
        let tampered = segments.join(".");

        assert!(service.decode(&tampered).is_err());
    }
}
