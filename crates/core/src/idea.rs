//! Idea content rules.

use crate::error::CoreError;

/// Validate idea content at the creation boundary.
///
/// Content must be non-empty after trimming; there is no length cap
/// (the column is TEXT). This is the only validation rule ideas carry.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn non_empty_content_is_accepted() {
        assert!(validate_content("This is a new idea.").is_ok());
    }

    #[test]
    fn empty_content_is_rejected() {
        assert_matches!(validate_content(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        assert_matches!(validate_content("   \t\n"), Err(CoreError::Validation(_)));
    }
}
