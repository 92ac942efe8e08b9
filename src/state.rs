//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, RegistryService};
use crate::infrastructure::persistence::{PgRedirectRepository, PgTokenRepository};

/// Application state shared across request handlers.
///
/// Holds the service layer plus the raw pool for health checks. Cloning is
/// cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub registry_service: Arc<RegistryService<PgRedirectRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
}

impl AppState {
    /// Builds application state from a connection pool and signing secret.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let redirect_repository = Arc::new(PgRedirectRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

        Self {
            pool,
            registry_service: Arc::new(RegistryService::new(redirect_repository)),
            auth_service: Arc::new(AuthService::new(token_repository, token_signing_secret)),
        }
    }
}
