//! Role names carried in access-token claims.

/// The single operator principal that manages site content.
pub const ROLE_ADMIN: &str = "admin";
