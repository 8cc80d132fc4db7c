//! URL shortening and retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repository::UrlRepository;
use crate::domain::url_record::{NewUrl, UrlRecord, UrlUpdate};
use crate::error::AppError;
use crate::utils::short_id::generate_short_id;

/// Insert attempts before short id allocation gives up.
const MAX_ALLOC_ATTEMPTS: usize = 5;

/// Service for creating, resolving, and managing shortened URLs.
///
/// Short id uniqueness is arbitrated by the repository's unique constraint:
/// the service inserts optimistically and retries on conflict rather than
/// checking for the id first, so concurrent allocations cannot race past
/// each other.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` is the public address short URLs are rendered under.
    pub fn new(repository: Arc<dyn UrlRepository>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Creates a short URL record for the given original URL.
    ///
    /// The original URL is stored verbatim. Scheme handling happens at
    /// redirect time, not here.
    ///
    /// # Short Id Allocation
    ///
    /// Generates a random 6-character alphanumeric id and inserts. On a
    /// unique-constraint conflict a fresh id is drawn, up to
    /// [`MAX_ALLOC_ATTEMPTS`] times. Any other repository error aborts
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AllocationExhausted`] when every attempt
    /// collided, or the underlying repository error otherwise.
    pub async fn create_short_url(&self, original_url: String) -> Result<UrlRecord, AppError> {
        for attempt in 0..MAX_ALLOC_ATTEMPTS {
            let new_url = NewUrl {
                short_id: generate_short_id(),
                original_url: original_url.clone(),
            };

            match self.repository.create(new_url).await {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "short id collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::allocation_exhausted(MAX_ALLOC_ATTEMPTS))
    }

    /// Retrieves a URL record by its short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the short id.
    pub async fn get_by_short_id(&self, short_id: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
            })
    }

    /// Retrieves every stored URL record in insertion order.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_all().await
    }

    /// Replaces both fields of the record identified by `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the short id, or
    /// [`AppError::Conflict`] if the new short id is already taken by
    /// another record.
    pub async fn update_url(
        &self,
        short_id: &str,
        update: UrlUpdate,
    ) -> Result<UrlRecord, AppError> {
        self.repository
            .update(short_id, update)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
            })
    }

    /// Deletes the record identified by `short_id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the short id.
    pub async fn delete_url(&self, short_id: &str) -> Result<UrlRecord, AppError> {
        self.repository.delete(short_id).await?.ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
        })
    }

    /// Verifies that the backing store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Constructs the full short URL for a short id.
    pub fn get_short_url(&self, short_id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_id)
    }
}
