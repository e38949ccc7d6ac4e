#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::auth::admin::AdminCredentials;
use folio_api::auth::jwt::{generate_access_token, JwtConfig};
use folio_api::auth::password::hash_password;
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_api::uploads::UploadStore;
use folio_core::roles::ROLE_ADMIN;
use folio_core::upload::MAX_UPLOAD_BYTES;

pub const ADMIN_EMAIL: &str = "owner@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const MULTIPART_BOUNDARY: &str = "folio-test-boundary";

/// Argon2 hashing is slow in debug builds; hash the test password once.
fn admin_password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"))
}

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        expiry_mins: 60,
    }
}

/// Build a test `ServerConfig` with safe defaults and a temporary upload dir.
pub fn test_config(upload_dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.path().to_path_buf(),
        max_upload_bytes: MAX_UPLOAD_BYTES,
        admin: AdminCredentials::new(ADMIN_EMAIL, admin_password_hash())
            .expect("test hash must be valid"),
        jwt: jwt_config(),
    }
}

/// A router wired to a test database plus the temp dir backing its uploads.
///
/// Keep the struct alive for the duration of the test; dropping it removes
/// the upload directory.
pub struct TestApp {
    pub router: Router,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Number of files currently in the upload directory.
    pub fn uploaded_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Build the full application router through the same builder production
/// uses, so tests exercise the real middleware stack.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("temp dir");
    let config = test_config(&upload_dir);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        uploads: Arc::new(UploadStore::new(config.upload_dir.clone())),
    };

    TestApp {
        router: build_app_router(state, &config),
        upload_dir,
    }
}

/// A valid admin bearer token for the test configuration.
pub fn admin_token() -> String {
    generate_access_token(ADMIN_EMAIL, ROLE_ADMIN, &jwt_config()).expect("token generation")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = builder(Method::POST, uri, None)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = builder(Method::POST, uri, Some(token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn patch_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::PATCH, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, builder(Method::DELETE, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::DELETE, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    parts: &[Part],
    token: Option<&str>,
) -> Response<Body> {
    let request = builder(Method::POST, uri, token)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

// ---------------------------------------------------------------------------
// Multipart bodies
// ---------------------------------------------------------------------------

/// One part of a `multipart/form-data` body.
pub struct Part {
    pub name: &'static str,
    pub file_name: Option<&'static str>,
    pub content_type: Option<&'static str>,
    pub data: Vec<u8>,
}

impl Part {
    pub fn file(file_name: &'static str, content_type: &'static str, data: Vec<u8>) -> Self {
        Self {
            name: "image",
            file_name: Some(file_name),
            content_type: Some(content_type),
            data,
        }
    }

    pub fn text(name: &'static str, value: &str) -> Self {
        Self {
            name,
            file_name: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        }
    }
}

pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        let disposition = match part.file_name {
            Some(file_name) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{file_name}\"\r\n",
                part.name
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
        };
        body.extend_from_slice(disposition.as_bytes());
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// A tiny byte payload standing in for PNG data; only the declared type is checked.
pub fn png_bytes() -> Vec<u8> {
    b"\x89PNG\r\n\x1a\nfake-image-data".to_vec()
}
