//! DTOs for the URL shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Stored verbatim, scheme handling happens at
    /// redirect time.
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,
}
