//! Repository trait for short link data access.

use crate::domain::entities::{NewLink, ShortLink};
use async_trait::async_trait;
use thiserror::Error;

/// Persistence failure at the repository seam.
///
/// Distinguishes "the code is already taken" from other write failures so
/// callers can regenerate and retry, and keeps read failures separate from
/// the expected absent-row outcome (`Ok(None)` from lookups).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("short code already exists")]
    DuplicateCode,
    #[error("write failed: {0}")]
    WriteFailed(#[source] sqlx::Error),
    #[error("read failed: {0}")]
    ReadFailed(#[source] sqlx::Error),
}

/// Repository interface for short link storage.
///
/// Insert is the only mutating operation; rows are never updated or
/// deleted. A successful insert is immediately visible to subsequent
/// lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the code is already present,
    /// [`StoreError::WriteFailed`] on any other database error.
    async fn insert(&self, new_link: NewLink) -> Result<ShortLink, StoreError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if no row matches (an expected outcome, not an error)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadFailed`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError>;
}
