//! Authentication primitives.
//!
//! - [`admin`] -- the configured admin credential and the login check.
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod admin;
pub mod jwt;
pub mod password;
