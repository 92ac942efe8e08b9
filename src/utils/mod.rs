//! Utility functions for URL checking and request path handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`destination`] - Destination URL validation
//! - [`path_segment`] - Short identifier extraction from request paths

pub mod destination;
pub mod path_segment;
