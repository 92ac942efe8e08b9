//! Redirect entity representing a claimed short identifier.

use chrono::{DateTime, Utc};

/// A registered short link.
///
/// Maps a short identifier to its destination URL. `destination` and
/// `owner_id` are write-once; `access_count` and `updated_at` change only
/// when the link is resolved.
#[derive(Debug, Clone)]
pub struct Redirect {
    pub short_path: String,
    pub destination: String,
    pub label: String,
    pub access_count: i64,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Redirect {
    /// Creates a new Redirect instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        short_path: String,
        destination: String,
        label: String,
        access_count: i64,
        owner_id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_path,
            destination,
            label,
            access_count,
            owner_id,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the link has never been resolved.
    pub fn is_unvisited(&self) -> bool {
        self.access_count == 0
    }
}

/// Input data for claiming a new short identifier.
#[derive(Debug, Clone)]
pub struct NewRedirect {
    pub short_path: String,
    pub destination: String,
    /// Human-readable annotation; empty string when the caller gave none.
    pub label: String,
    pub owner_id: String,
}
