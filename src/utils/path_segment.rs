//! Short identifier extraction from request paths.

/// Returns the final non-empty segment of a request path.
///
/// The redirect route matches arbitrary paths; the short identifier is the
/// last segment with content, so `/abc`, `/go/abc`, and `/abc///` all yield
/// `abc`.
///
/// # Returns
///
/// `None` when the path contains no non-empty segment (e.g. `/` or `///`).
pub fn final_segment(path: &str) -> Option<&str> {
    path.split('/').filter(|s| !s.is_empty()).next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        assert_eq!(final_segment("abc123"), Some("abc123"));
        assert_eq!(final_segment("/abc123"), Some("abc123"));
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(final_segment("go/docs/abc123"), Some("abc123"));
    }

    #[test]
    fn test_trailing_slashes() {
        assert_eq!(final_segment("abc123/"), Some("abc123"));
        assert_eq!(final_segment("abc123///"), Some("abc123"));
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(final_segment(""), None);
        assert_eq!(final_segment("/"), None);
        assert_eq!(final_segment("///"), None);
    }
}
