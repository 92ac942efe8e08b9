//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path_segment::final_segment;

/// Redirects a short identifier to its destination URL.
///
/// # Endpoint
///
/// `GET /{path...}` (public)
///
/// The identifier is the final non-empty segment of the request path, so
/// `/abc123` and `/go/abc123` both resolve `abc123`.
///
/// # Request Flow
///
/// 1. Extract the identifier from the path
/// 2. Atomically look up the destination and increment the access counter
/// 3. Return `302 Found` with the `Location` header
///
/// Lookup and counter increment are one storage operation, so every
/// successful redirect is counted exactly once.
///
/// # Errors
///
/// Returns 404 Not Found (plain text) if the identifier is unknown.
/// Returns 400 Bad Request if the path has no identifier segment.
/// Returns 500 Internal Server Error on storage failure.
pub async fn redirect_handler(
    Path(path): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let Some(short_path) = final_segment(&path) else {
        return missing_identifier().await.into_response();
    };

    match state.registry_service.resolve(short_path).await {
        Ok(redirect) => {
            debug!(
                short_path = %redirect.short_path,
                access_count = redirect.access_count,
                "Redirecting"
            );
            (
                StatusCode::FOUND,
                [(header::LOCATION, redirect.destination)],
            )
                .into_response()
        }
        Err(AppError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            format!("No redirect registered for '{short_path}'"),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// Answers requests whose path carries no identifier segment.
///
/// # Endpoint
///
/// `GET /`
pub async fn missing_identifier() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, "Missing short link identifier")
}
