//! Contact form options.
//!
//! The public contact form offers a fixed list of project types. The list is
//! advisory: submissions with other values are stored as-is.

/// Project types offered by the public contact form.
pub const PROJECT_TYPES: &[&str] = &[
    "YouTube Thumbnails",
    "Bulk Package (10+ thumbnails)",
    "Brand Guidelines",
    "Custom Request",
];

/// Whether `project_type` is one of the options offered by the contact form.
pub fn is_known_project_type(project_type: &str) -> bool {
    PROJECT_TYPES.contains(&project_type.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_match() {
        assert!(is_known_project_type("YouTube Thumbnails"));
        assert!(is_known_project_type("  Custom Request "));
    }

    #[test]
    fn unknown_types_do_not_match() {
        assert!(!is_known_project_type("youtube thumbnails"));
        assert!(!is_known_project_type(""));
        assert!(!is_known_project_type("Logo Design"));
    }
}
