/**
 * Host Session Tokens
 *
 * The host platform vouches for its logged-in users with HS256-signed JWTs
 * sharing a secret with the bridge. This module creates and verifies them.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Token lifetime used by `create_token` (30 days)
pub const TOKEN_LIFETIME_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Host platform user id
    pub sub: String,
    /// Display name (optional)
    #[serde(default)]
    pub name: Option<String>,
    /// Host platform administrator
    #[serde(default)]
    pub admin: bool,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Signing and verification keys derived from the shared secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a session token for a host user
    pub fn create_token(&self, uid: &str, admin: bool) -> Result<String, SessionError> {
        let now = unix_now();
        let claims = Claims {
            sub: uid.to_string(),
            name: None,
            admin,
            exp: now + TOKEN_LIFETIME_SECS,
            iat: now,
        };
        self.encode_claims(&claims)
    }

    /// Sign arbitrary claims
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, SessionError> {
        Ok(encode(&Header::default(), claims, &self.encoding)?)
    }

    /// Verify and decode a session token
    pub fn verify_token(&self, token: &str) -> Result<Claims, SessionError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let keys = SessionKeys::new("test-secret");
        let token = keys.create_token("alice", false).unwrap();
        let claims = keys.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert!(!claims.admin);
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = SessionKeys::new("secret-a").create_token("alice", true).unwrap();
        assert!(SessionKeys::new("secret-b").verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = SessionKeys::new("test-secret");
        let claims = Claims {
            sub: "alice".to_string(),
            name: None,
            admin: false,
            exp: 1_000,
            iat: 0,
        };
        let token = keys.encode_claims(&claims).unwrap();
        assert!(keys.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let keys = SessionKeys::new("test-secret");
        assert!(keys.verify_token("not-a-jwt").is_err());
    }
}
