//! Shared response DTO for stored URLs.

use serde::Serialize;

/// A stored short URL as returned by the API.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub short_id: String,
    pub short_url: String,
    pub original_url: String,
}
