//! Short link registration and resolution service.

use std::sync::Arc;

use crate::domain::CallerIdentity;
use crate::domain::entities::{NewRedirect, Redirect};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::utils::destination::validate_destination;
use serde_json::json;

/// Service implementing the redirect registry operations.
///
/// Holds no state of its own; every call delegates to a single atomic
/// repository operation, so the service is safe to share across any number
/// of concurrent request handlers. Input validation always happens before
/// the repository is touched.
pub struct RegistryService<R: RedirectRepository> {
    repository: Arc<R>,
}

impl<R: RedirectRepository> RegistryService<R> {
    /// Creates a new registry service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Claims a short identifier for a destination URL.
    ///
    /// The claim is exclusive: of two concurrent registrations of the same
    /// identifier exactly one succeeds, and an existing record is never
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// - `short_path` - identifier to claim
    /// - `destination` - URL the identifier will redirect to
    /// - `label` - optional annotation, stored as `""` when absent
    /// - `caller` - authenticated caller; `None` is rejected here rather than
    ///   in the HTTP middleware so the contract holds for every transport
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_path` or `destination` is
    /// empty or the destination is not an absolute HTTP(S) URL.
    /// Returns [`AppError::Unauthorized`] if `caller` is absent.
    /// Returns [`AppError::Conflict`] if the identifier is already claimed.
    pub async fn register(
        &self,
        short_path: &str,
        destination: &str,
        label: Option<String>,
        caller: Option<&CallerIdentity>,
    ) -> Result<Redirect, AppError> {
        if short_path.trim().is_empty() {
            return Err(AppError::bad_request(
                "short_path must not be empty",
                json!({ "field": "short_path" }),
            ));
        }

        let destination = validate_destination(destination).map_err(|e| {
            AppError::bad_request("Invalid destination URL", json!({ "reason": e.to_string() }))
        })?;

        let caller = caller.ok_or_else(|| {
            AppError::unauthorized(
                "Authentication required",
                json!({ "reason": "caller identity is absent" }),
            )
        })?;

        let redirect = self
            .repository
            .create(NewRedirect {
                short_path: short_path.to_string(),
                destination,
                label: label.unwrap_or_default(),
                owner_id: caller.as_str().to_string(),
            })
            .await?;

        tracing::info!(
            short_path = %redirect.short_path,
            owner = %redirect.owner_id,
            "Short link registered"
        );

        Ok(redirect)
    }

    /// Checks whether a short identifier is already claimed.
    ///
    /// Advisory point read: the result carries no reservation, a concurrent
    /// registration may still claim the identifier first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_path` is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn check_availability(&self, short_path: &str) -> Result<bool, AppError> {
        if short_path.trim().is_empty() {
            return Err(AppError::bad_request(
                "short_path must not be empty",
                json!({ "field": "short_path" }),
            ));
        }

        self.repository.exists(short_path).await
    }

    /// Resolves a short identifier and increments its access counter.
    ///
    /// Lookup and increment are one atomic storage operation; an unknown
    /// identifier leaves no trace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_path` is empty.
    /// Returns [`AppError::NotFound`] if no link matches the identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, short_path: &str) -> Result<Redirect, AppError> {
        if short_path.trim().is_empty() {
            return Err(AppError::bad_request(
                "short_path must not be empty",
                json!({ "field": "short_path" }),
            ));
        }

        self.repository
            .resolve_and_count(short_path)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_path": short_path }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRedirectRepository;
    use chrono::Utc;

    fn test_caller() -> CallerIdentity {
        CallerIdentity::new("u1").unwrap()
    }

    fn test_redirect(short_path: &str, destination: &str, access_count: i64) -> Redirect {
        let now = Utc::now();
        Redirect::new(
            short_path.to_string(),
            destination.to_string(),
            String::new(),
            access_count,
            "u1".to_string(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_redirect| {
                new_redirect.short_path == "abc123"
                    && new_redirect.destination == "https://example.com"
                    && new_redirect.label.is_empty()
                    && new_redirect.owner_id == "u1"
            })
            .times(1)
            .returning(|_| Ok(test_redirect("abc123", "https://example.com", 0)));

        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service
            .register("abc123", "https://example.com", None, Some(&test_caller()))
            .await;

        assert!(result.is_ok());
        let redirect = result.unwrap();
        assert_eq!(redirect.short_path, "abc123");
        assert_eq!(redirect.access_count, 0);
    }

    #[tokio::test]
    async fn test_register_empty_short_path_never_touches_storage() {
        // No expectations set: any repository call would panic the mock.
        let mock_repo = MockRedirectRepository::new();
        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service
            .register("", "https://example.com", None, Some(&test_caller()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_empty_destination_never_touches_storage() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo.expect_create().times(0);

        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service
            .register("abc123", "", None, Some(&test_caller()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_invalid_destination() {
        let mock_repo = MockRedirectRepository::new();
        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service
            .register("abc123", "not-a-url", None, Some(&test_caller()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_without_caller() {
        let mock_repo = MockRedirectRepository::new();
        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service
            .register("abc123", "https://example.com", None, None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_register_conflict_passthrough() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Already exists",
                json!({ "short_path": "dup" }),
            ))
        });

        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service
            .register("dup", "https://example.com", None, Some(&test_caller()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_register_keeps_label() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_redirect| new_redirect.label == "team docs")
            .times(1)
            .returning(|_| Ok(test_redirect("docs", "https://example.com", 0)));

        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service
            .register(
                "docs",
                "https://example.com",
                Some("team docs".to_string()),
                Some(&test_caller()),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_check_availability_exists() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_exists()
            .withf(|short_path| short_path == "abc123")
            .times(1)
            .returning(|_| Ok(true));

        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service.check_availability("abc123").await;
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_check_availability_empty_never_touches_storage() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo.expect_exists().times(0);

        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service.check_availability("").await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_resolve_returns_incremented_record() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_resolve_and_count()
            .withf(|short_path| short_path == "r1")
            .times(1)
            .returning(|_| Ok(Some(test_redirect("r1", "https://a.com", 1))));

        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service.resolve("r1").await;
        assert!(result.is_ok());
        let redirect = result.unwrap();
        assert_eq!(redirect.destination, "https://a.com");
        assert_eq!(redirect.access_count, 1);
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_resolve_and_count()
            .times(1)
            .returning(|_| Ok(None));

        let service = RegistryService::new(Arc::new(mock_repo));

        let result = service.resolve("missing-id").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
