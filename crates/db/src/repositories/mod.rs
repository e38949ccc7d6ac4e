//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_content_repo;
pub mod contact_message_repo;
pub mod thumbnail_repo;

pub use about_content_repo::AboutContentRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use thumbnail_repo::ThumbnailRepo;
