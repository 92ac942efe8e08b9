//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgRedirectRepository`] - Short link storage, claims, and resolution
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_redirect_repository;
pub mod pg_token_repository;

pub use pg_redirect_repository::PgRedirectRepository;
pub use pg_token_repository::PgTokenRepository;
