//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`RedirectRepository`] - Short link claims, existence probes, and resolution
//! - [`TokenRepository`] - API token authentication
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod redirect_repository;
pub mod token_repository;

pub use redirect_repository::RedirectRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use redirect_repository::MockRedirectRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
