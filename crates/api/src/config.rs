use std::path::PathBuf;

use folio_core::upload::MAX_UPLOAD_BYTES;

use crate::auth::admin::AdminCredentials;
use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the admin credential and JWT secret has a default
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded images are written to (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Maximum accepted image size in bytes (default: 5 MiB).
    pub max_upload_bytes: u64,
    /// The single admin login.
    pub admin: AdminCredentials,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_DIR`           | `uploads`                  |
    /// | `MAX_UPLOAD_BYTES`     | `5242880`                  |
    ///
    /// See [`AdminCredentials::from_env`] and [`JwtConfig::from_env`] for
    /// the required auth variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let max_upload_bytes: u64 = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            max_upload_bytes,
            admin: AdminCredentials::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}
