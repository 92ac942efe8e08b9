mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use redirect_registry::api::handlers::{missing_identifier, redirect_handler};
use redirect_registry::state::AppState;
use sqlx::PgPool;

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(missing_identifier))
        .route("/{*path}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(app(state)).unwrap();

    common::insert_redirect(&pool, "redirect1", "https://example.com/target", "u1").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_increments_access_count(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(app(state)).unwrap();

    common::insert_redirect(&pool, "r1", "https://a.com", "u1").await;

    for _ in 0..3 {
        let response = server.get("/r1").await;
        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), "https://a.com");
    }

    let stored = common::fetch_redirect(&pool, "r1").await.unwrap();
    assert_eq!(stored.access_count, 3);
}

#[sqlx::test]
async fn test_redirect_not_found_is_side_effect_free(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(app(state)).unwrap();

    common::insert_redirect_with_count(&pool, "existing", "https://a.com", "u1", 7).await;

    let response = server.get("/missing-id").await;

    response.assert_status_not_found();
    assert!(response.text().contains("missing-id"));

    // No record was created and nothing else changed.
    assert!(common::fetch_redirect(&pool, "missing-id").await.is_none());
    assert_eq!(common::redirect_count(&pool).await, 1);
    let existing = common::fetch_redirect(&pool, "existing").await.unwrap();
    assert_eq!(existing.access_count, 7);
}

#[sqlx::test]
async fn test_redirect_missing_identifier(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_redirect_uses_final_path_segment(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(app(state)).unwrap();

    common::insert_redirect(&pool, "abc123", "https://example.com", "u1").await;

    let response = server.get("/go/team/abc123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}
