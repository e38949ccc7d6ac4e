//! JWT access tokens for the admin session.
//!
//! Tokens are HS256-signed and carry a [`Claims`] payload. There are no
//! refresh tokens; an expired token means logging in again.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the admin email the token was issued to.
    pub sub: String,
    /// Role name, always `"admin"` today.
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 60).
    pub expiry_mins: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JWT_SECRET`      | **yes**  | --      |
    /// | `JWT_EXPIRY_MINS` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty, or if the expiry is not
    /// a positive integer.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_mins: i64 = std::env::var("JWT_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_EXPIRY_MINS must be a valid i64");
        assert!(expiry_mins > 0, "JWT_EXPIRY_MINS must be positive");

        Self {
            secret,
            expiry_mins,
        }
    }

    /// Token lifetime in seconds, as reported to clients.
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_mins * 60
    }
}

/// Generate an HS256 access token for `subject` with the given role.
pub fn generate_access_token(
    subject: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: subject.to_string(),
        role: role.to_string(),
        exp: now + config.expiry_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            expiry_mins: 60,
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config("test-secret-that-is-long-enough-for-hmac");
        let token = generate_access_token("owner@example.com", "admin", &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, "owner@example.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config("test-secret-that-is-long-enough-for-hmac");

        // Well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "owner@example.com".to_string(),
            role: "admin".to_string(),
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let token = generate_access_token("owner@example.com", "admin", &test_config("alpha"))
            .expect("token generation should succeed");

        let result = validate_token(&token, &test_config("bravo"));
        assert!(result.is_err(), "token signed with a different secret must fail");
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(validate_token("not.a.jwt", &test_config("alpha")).is_err());
    }
}
