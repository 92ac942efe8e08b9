//! Handler for the short link registration endpoint.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::register::{RegisterRequest, RegisterResponse};
use crate::domain::CallerIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Claims a short identifier for a destination URL.
///
/// # Endpoint
///
/// `POST /api/register` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// {
///   "short_path": "abc123",
///   "original_url": "https://example.com",
///   "label": "docs"          // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "short_path": "abc123",
///   "message": "Short link registered"
/// }
/// ```
///
/// The caller identity is taken from the request extension placed there by
/// the auth middleware and handed to the registry explicitly; the registry
/// rejects an absent caller even if this handler is ever wired up without
/// the middleware.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 401 Unauthorized if no caller identity is present.
/// Returns 409 Conflict if the identifier is already claimed.
pub async fn register_handler(
    State(state): State<AppState>,
    caller: Option<Extension<CallerIdentity>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    payload.validate()?;

    let caller = caller.map(|Extension(c)| c);

    let redirect = state
        .registry_service
        .register(
            &payload.short_path,
            &payload.original_url,
            payload.label,
            caller.as_ref(),
        )
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        short_path: redirect.short_path,
        message: "Short link registered".to_string(),
    }))
}
