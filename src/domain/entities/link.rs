//! Short link entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted mapping from a short code to its target URL.
///
/// Records are insert-only: a `code` never changes once created and rows
/// are never updated. Multiple codes may point at the same target; there is
/// no reverse-uniqueness constraint on `target`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ShortLink {
    pub id: i64,
    /// Fixed-length alphanumeric short code, unique per record.
    pub code: String,
    /// The original long URL, stored verbatim.
    pub target: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new short link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target: String,
}

impl ShortLink {
    pub fn new(id: i64, code: String, target: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            target,
            created_at,
        }
    }
}
