//! DTOs for the availability probe endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request asking whether a short identifier is already claimed.
#[derive(Debug, Deserialize, Validate)]
pub struct AvailabilityRequest {
    #[validate(length(min = 1, max = 64))]
    pub short_path: String,
}

/// Availability probe result.
///
/// Advisory only: `exists: false` is not a reservation.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub exists: bool,
}
