//! DTO for the URL update endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `PUT /urls/{short_id}`.
///
/// Both fields are required and must be non-empty; they replace the stored
/// record's fields together. Beyond non-emptiness the new short id is taken
/// as supplied: uniqueness is enforced by the store, and the generator's
/// length and alphabet rules are not re-applied here.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    /// New destination URL for this record.
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,

    /// New short id for this record.
    #[validate(length(min = 1, message = "short_id must not be empty"))]
    pub short_id: String,
}
