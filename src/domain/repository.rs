//! Repository trait for URL record data access.

use crate::domain::url_record::{NewUrl, UrlRecord, UrlUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL store.
///
/// Absence is a normal result, not an error: lookups, updates and deletes
/// against an unknown `short_id` return `Ok(None)`. Every operation is
/// single-record transactional (it either fully commits or has no effect),
/// and implementations must not hold any in-process lock across I/O.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-memory,
///   used by tests and local development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_id` already exists; the
    /// unique constraint is the sole arbiter, including between concurrent
    /// creates racing on the same identifier. Returns [`AppError::Database`]
    /// on other persistence errors.
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError>;

    /// Exact-match lookup by short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on persistence errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns every record, ordered by primary key ascending (the persisted
    /// insertion order).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on persistence errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Replaces both `original_url` and `short_id` of the record matching
    /// `short_id`, atomically.
    ///
    /// Returns `Ok(None)` when no record matches. The caller-supplied new
    /// `short_id` is not re-validated for format, only for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new `short_id` is already taken
    /// by another record. Returns [`AppError::Database`] on other
    /// persistence errors.
    async fn update(
        &self,
        short_id: &str,
        update: UrlUpdate,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Removes the record matching `short_id` and returns its data for
    /// caller confirmation, or `Ok(None)` when nothing matched (no side
    /// effect in that case).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on persistence errors.
    async fn delete(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Cheap connectivity probe for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
