//! Repository trait for short link data access.

use crate::domain::entities::{NewRedirect, Redirect};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short link registry.
///
/// Every operation is a single atomic storage call; the registry keeps no
/// state between calls, so all concurrency guarantees live behind this trait.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRedirectRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_redirect.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Claims a short identifier.
    ///
    /// The existence check and the write are one atomic operation: of two
    /// concurrent claims on the same identifier, exactly one succeeds and the
    /// other observes [`AppError::Conflict`]. An existing record is never
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier is already claimed.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError>;

    /// Checks whether a short identifier is already claimed.
    ///
    /// Single point read, no transaction. Advisory only: a `false` result is
    /// not a reservation and a concurrent claim may still win.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, short_path: &str) -> Result<bool, AppError>;

    /// Resolves a short identifier, incrementing its access counter.
    ///
    /// Read, increment, and `updated_at` refresh happen in one atomic
    /// statement: under N concurrent resolves of the same identifier the
    /// counter advances by exactly N.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Redirect))` with the post-increment record if found
    /// - `Ok(None)` if the identifier is unknown; nothing is written
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn resolve_and_count(&self, short_path: &str) -> Result<Option<Redirect>, AppError>;
}
