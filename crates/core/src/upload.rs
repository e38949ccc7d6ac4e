//! Image upload policy: accepted content types, size limit, and stored
//! filename generation.
//!
//! The HTTP layer applies these checks while streaming a multipart field so
//! that a rejected upload never reaches the disk or the database.

use rand::Rng;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default maximum size of a single uploaded image (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Declared content types must start with this prefix.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Prefix of every generated filename, taken from the multipart field name.
pub const STORED_FILE_PREFIX: &str = "image";

/// Upper bound (exclusive) of the random filename suffix.
const RANDOM_SUFFIX_BOUND: u32 = 1_000_000_000;

/// Extensions longer than this are dropped rather than truncated.
const MAX_EXTENSION_LEN: usize = 10;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that the declared content type is an image type.
///
/// A missing content type is rejected the same way as a non-image one.
pub fn validate_content_type(content_type: Option<&str>) -> Result<(), CoreError> {
    match content_type {
        Some(ct) if ct.trim().to_ascii_lowercase().starts_with(IMAGE_MIME_PREFIX) => Ok(()),
        Some(ct) => Err(CoreError::InvalidFileType(format!(
            "Only image files are allowed, got '{ct}'"
        ))),
        None => Err(CoreError::InvalidFileType(
            "Only image files are allowed, no content type was declared".into(),
        )),
    }
}

/// Validate that `size` bytes fit within `max` bytes.
pub fn validate_size(size: u64, max: u64) -> Result<(), CoreError> {
    if size > max {
        Err(CoreError::FileTooLarge { max })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Filenames
// ---------------------------------------------------------------------------

/// Extract a safe, lowercased extension from a client-supplied filename.
///
/// Returns `None` when the name has no extension or the extension contains
/// anything other than ASCII alphanumerics.
pub fn sanitize_extension(original_name: &str) -> Option<String> {
    let base = original_name.rsplit(['/', '\\']).next().unwrap_or(original_name);
    let (stem, ext) = base.rsplit_once('.')?;
    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Build a stored filename from its parts: `image-<millis>-<suffix>[.<ext>]`.
pub fn build_filename(original_name: &str, unix_millis: i64, suffix: u32) -> String {
    match sanitize_extension(original_name) {
        Some(ext) => format!("{STORED_FILE_PREFIX}-{unix_millis}-{suffix}.{ext}"),
        None => format!("{STORED_FILE_PREFIX}-{unix_millis}-{suffix}"),
    }
}

/// Generate a collision-resistant stored filename for an upload received at `now`.
pub fn generate_filename(original_name: &str, now: Timestamp) -> String {
    let suffix = rand::rng().random_range(0..RANDOM_SUFFIX_BOUND);
    build_filename(original_name, now.timestamp_millis(), suffix)
}
