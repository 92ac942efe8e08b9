//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the redirect registry. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Redirect`] - A claimed short identifier and its destination
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewRedirect`] carries the caller-supplied fields, while the server assigns
//! `access_count` and the timestamps.

pub mod redirect;

pub use redirect::{NewRedirect, Redirect};
