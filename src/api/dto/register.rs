//! DTOs for the short link registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to claim a short identifier.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Identifier to claim. Must be non-empty; bounded to keep short links short.
    #[validate(length(min = 1, max = 64))]
    pub short_path: String,

    /// Destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional human-readable annotation, stored as empty string when absent.
    pub label: Option<String>,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub short_path: String,
    pub message: String,
}
