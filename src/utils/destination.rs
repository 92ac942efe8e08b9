//! Destination URL validation.
//!
//! The stored destination is returned to visitors verbatim, so it is only
//! checked here, never rewritten.

use url::Url;

/// Errors that can occur while validating a destination URL.
#[derive(Debug, thiserror::Error)]
pub enum DestinationError {
    #[error("Destination must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a destination URL.
///
/// # Rules
///
/// 1. Must be non-empty after trimming surrounding whitespace
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http` or `https`
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`DestinationError::Empty`] for blank input.
/// Returns [`DestinationError::InvalidFormat`] for malformed URLs.
/// Returns [`DestinationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_destination(input: &str) -> Result<String, DestinationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DestinationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| DestinationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(DestinationError::UnsupportedProtocol),
    }

    // Stored as given, not as the parser re-serializes it.
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        let result = validate_destination("https://example.com");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[test]
    fn test_validate_preserves_input_verbatim() {
        let result = validate_destination("https://EXAMPLE.COM:443/Path?q=1#frag");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "https://EXAMPLE.COM:443/Path?q=1#frag");
    }

    #[test]
    fn test_validate_trims_whitespace() {
        let result = validate_destination("  https://example.com/target  ");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "https://example.com/target");
    }

    #[test]
    fn test_validate_empty() {
        let result = validate_destination("");
        assert!(matches!(result.unwrap_err(), DestinationError::Empty));

        let result = validate_destination("   ");
        assert!(matches!(result.unwrap_err(), DestinationError::Empty));
    }

    #[test]
    fn test_validate_not_a_url() {
        let result = validate_destination("not a valid url");
        assert!(matches!(
            result.unwrap_err(),
            DestinationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_validate_no_protocol() {
        let result = validate_destination("example.com/path");
        assert!(matches!(
            result.unwrap_err(),
            DestinationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_validate_javascript_protocol() {
        let result = validate_destination("javascript:alert('xss')");
        assert!(matches!(
            result.unwrap_err(),
            DestinationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_file_protocol() {
        let result = validate_destination("file:///etc/passwd");
        assert!(matches!(
            result.unwrap_err(),
            DestinationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_localhost_with_port() {
        let result = validate_destination("http://localhost:3000/test");
        assert!(result.is_ok());
    }
}
