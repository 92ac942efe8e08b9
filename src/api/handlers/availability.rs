//! Handler for the short path availability probe.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::availability::{AvailabilityRequest, AvailabilityResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether a short identifier is already claimed.
///
/// # Endpoint
///
/// `POST /api/availability` (no authentication; public "is this name taken" probe)
///
/// # Request Body
///
/// ```json
/// { "short_path": "abc123" }
/// ```
///
/// # Response
///
/// ```json
/// { "exists": true }
/// ```
///
/// Best-effort freshness: the answer is advisory, not a reservation — a
/// concurrent registration may claim the identifier between this probe and a
/// later register call.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn availability_handler(
    State(state): State<AppState>,
    Json(payload): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    payload.validate()?;

    let exists = state
        .registry_service
        .check_availability(&payload.short_path)
        .await?;

    Ok(Json(AvailabilityResponse { exists }))
}
