//! PostgreSQL implementation of the redirect repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRedirect, Redirect};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// Row shape shared by every query returning a full redirect record.
#[derive(sqlx::FromRow)]
struct RedirectRow {
    short_path: String,
    destination: String,
    label: String,
    access_count: i64,
    owner_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RedirectRow> for Redirect {
    fn from(row: RedirectRow) -> Self {
        Redirect::new(
            row.short_path,
            row.destination,
            row.label,
            row.access_count,
            row.owner_id,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL repository for the short link registry.
///
/// Each operation is a single SQL statement, so the atomicity the registry
/// needs comes from statement-level guarantees: the primary key makes a claim
/// exclusive, and `access_count = access_count + 1` cannot lose updates.
pub struct PgRedirectRepository {
    pool: Arc<PgPool>,
}

impl PgRedirectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectRepository for PgRedirectRepository {
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError> {
        let row = sqlx::query_as::<_, RedirectRow>(
            r#"
            INSERT INTO redirects (short_path, destination, label, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING short_path, destination, label, access_count, owner_id, created_at, updated_at
            "#,
        )
        .bind(&new_redirect.short_path)
        .bind(&new_redirect.destination)
        .bind(&new_redirect.label)
        .bind(&new_redirect.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn exists(&self, short_path: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM redirects WHERE short_path = $1)",
        )
        .bind(short_path)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn resolve_and_count(&self, short_path: &str) -> Result<Option<Redirect>, AppError> {
        let row = sqlx::query_as::<_, RedirectRow>(
            r#"
            UPDATE redirects
            SET access_count = access_count + 1,
                updated_at = NOW()
            WHERE short_path = $1
            RETURNING short_path, destination, label, access_count, owner_id, created_at, updated_at
            "#,
        )
        .bind(short_path)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
