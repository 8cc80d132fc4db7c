//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::api::dto::url::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted original URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record:
///
/// ```json
/// {
///   "short_id": "Ab3xZ9",
///   "short_url": "http://127.0.0.1:8080/Ab3xZ9",
///   "original_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// The original URL is echoed back exactly as submitted.
///
/// # Errors
///
/// Returns 400 Bad Request when `original_url` is empty.
/// Returns 500 Internal Server Error if short id allocation runs out of attempts.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    payload.validate()?;

    let record = state.url_service.create_short_url(payload.original_url).await?;
    let short_url = state.url_service.get_short_url(&record.short_id);

    Ok((
        StatusCode::CREATED,
        Json(UrlResponse {
            short_id: record.short_id,
            short_url,
            original_url: record.original_url,
        }),
    ))
}
