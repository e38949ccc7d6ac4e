//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO for writes
//!
//! Entities serialize with camelCase field names, which is what the web
//! client consumes.

pub mod about_content;
pub mod contact_message;
pub mod thumbnail;
