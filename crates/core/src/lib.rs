//! Domain primitives shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O; it only defines types, the error
//! taxonomy, and pure policy functions.

pub mod contact;
pub mod error;
pub mod roles;
pub mod types;
pub mod upload;
