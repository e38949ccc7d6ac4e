//! Authentication extractors.
//!
//! - [`auth::AdminUser`] -- requires a valid admin Bearer token.

pub mod auth;
