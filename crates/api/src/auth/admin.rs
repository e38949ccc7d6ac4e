//! The single admin principal.
//!
//! The site has exactly one operator. Their email and an Argon2id hash of
//! their password come from the environment; a successful check is what
//! allows `POST /api/admin/login` to issue an access token.

use super::password::{hash_password, is_valid_hash, verify_password};

/// The configured admin credential.
#[derive(Clone)]
pub struct AdminCredentials {
    /// Login email, stored trimmed and lowercased.
    pub email: String,
    /// Argon2id PHC hash of the admin password.
    password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    /// Build credentials from an email and an existing PHC hash.
    ///
    /// Returns `None` if the hash is not a valid PHC string.
    pub fn new(email: &str, password_hash: impl Into<String>) -> Option<Self> {
        let password_hash = password_hash.into();
        if !is_valid_hash(&password_hash) {
            return None;
        }
        Some(Self {
            email: normalize_email(email),
            password_hash,
        })
    }

    /// Load the admin credential from environment variables.
    ///
    /// | Env Var               | Required | Notes                                   |
    /// |-----------------------|----------|-----------------------------------------|
    /// | `ADMIN_EMAIL`         | **yes**  |                                         |
    /// | `ADMIN_PASSWORD_HASH` | one of   | Argon2id PHC string                     |
    /// | `ADMIN_PASSWORD`      | one of   | plaintext, hashed once at startup       |
    ///
    /// # Panics
    ///
    /// Panics if the email is missing, if neither password variable is set,
    /// or if the hash cannot be parsed.
    pub fn from_env() -> Self {
        let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
        assert!(!email.trim().is_empty(), "ADMIN_EMAIL must not be empty");

        let password_hash = match std::env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                let plaintext = std::env::var("ADMIN_PASSWORD")
                    .expect("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set");
                assert!(!plaintext.is_empty(), "ADMIN_PASSWORD must not be empty");
                tracing::warn!(
                    "ADMIN_PASSWORD is set in plaintext; prefer ADMIN_PASSWORD_HASH in production"
                );
                hash_password(&plaintext)
                    .unwrap_or_else(|e| panic!("Failed to hash ADMIN_PASSWORD: {e}"))
            }
        };

        Self::new(&email, password_hash)
            .expect("ADMIN_PASSWORD_HASH must be a valid Argon2 PHC string")
    }

    /// Check a submitted email/password pair against the configured credential.
    ///
    /// The password hash is verified even when the email does not match, so
    /// both failure cases cost the same.
    pub fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<bool, argon2::password_hash::Error> {
        let email_matches = normalize_email(email) == self.email;
        let password_matches = verify_password(password, &self.password_hash)?;
        Ok(email_matches && password_matches)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
