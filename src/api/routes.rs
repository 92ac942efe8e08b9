//! API route configuration.
//!
//! Registration requires Bearer token authentication via
//! [`crate::api::middleware::auth`]; the availability probe is public.

use crate::api::handlers::{availability_handler, register_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /register` - Claim a short identifier for a destination URL
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/register", post(register_handler))
}

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /availability` - Check whether a short identifier is taken
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/availability", post(availability_handler))
}
