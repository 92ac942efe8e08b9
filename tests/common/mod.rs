#![allow(dead_code)]

use redirect_registry::application::services::auth_service::hash_token;
use redirect_registry::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// Builds application state backed by the test pool.
pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SIGNING_SECRET.to_string())
}

/// Hashes a raw token the same way the server does.
pub fn test_token_hash(token: &str) -> String {
    hash_token(TEST_SIGNING_SECRET, token)
}

pub async fn insert_token(pool: &PgPool, name: &str, owner_id: &str, token: &str) {
    sqlx::query("INSERT INTO api_tokens (name, owner_id, token_hash) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(owner_id)
        .bind(test_token_hash(token))
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_revoked_token(pool: &PgPool, name: &str, owner_id: &str, token: &str) {
    sqlx::query(
        "INSERT INTO api_tokens (name, owner_id, token_hash, revoked_at) VALUES ($1, $2, $3, NOW())",
    )
    .bind(name)
    .bind(owner_id)
    .bind(test_token_hash(token))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_redirect(pool: &PgPool, short_path: &str, destination: &str, owner_id: &str) {
    sqlx::query("INSERT INTO redirects (short_path, destination, owner_id) VALUES ($1, $2, $3)")
        .bind(short_path)
        .bind(destination)
        .bind(owner_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_redirect_with_count(
    pool: &PgPool,
    short_path: &str,
    destination: &str,
    owner_id: &str,
    access_count: i64,
) {
    sqlx::query(
        "INSERT INTO redirects (short_path, destination, owner_id, access_count) VALUES ($1, $2, $3, $4)",
    )
    .bind(short_path)
    .bind(destination)
    .bind(owner_id)
    .bind(access_count)
    .execute(pool)
    .await
    .unwrap();
}

/// Snapshot of a stored redirect row for assertions.
#[derive(Debug, sqlx::FromRow)]
pub struct StoredRedirect {
    pub destination: String,
    pub label: String,
    pub access_count: i64,
    pub owner_id: String,
}

pub async fn fetch_redirect(pool: &PgPool, short_path: &str) -> Option<StoredRedirect> {
    sqlx::query_as::<_, StoredRedirect>(
        "SELECT destination, label, access_count, owner_id FROM redirects WHERE short_path = $1",
    )
    .bind(short_path)
    .fetch_optional(pool)
    .await
    .unwrap()
}

pub async fn redirect_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM redirects")
        .fetch_one(pool)
        .await
        .unwrap()
}
