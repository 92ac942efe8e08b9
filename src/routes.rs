//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{path...}`         - Short link redirect (public)
//! - `GET  /health`            - Health check (public)
//! - `POST /api/register`      - Claim a short identifier (Bearer token required)
//! - `POST /api/availability`  - Availability probe (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Bearer token on the registration route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, missing_identifier, redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The redirect route is a wildcard so nested paths like `/go/abc123` still
/// resolve their final segment; `/health` and `/api` take precedence as more
/// specific matches.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let api_public = api::routes::public_routes().layer(rate_limit::layer());

    let api_router = Router::new().merge(api_protected).merge(api_public);

    let router = Router::new()
        .route("/", get(missing_identifier))
        .route("/{*path}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
