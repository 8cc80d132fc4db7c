//! Handlers for URL management endpoints (list, update, delete).

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::update_url::UpdateUrlRequest;
use crate::api::dto::url::UrlResponse;
use crate::domain::url_record::UrlUpdate;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored URL.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Response
///
/// A JSON array of stored records in insertion order.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let records = state.url_service.list_all().await?;

    let items = records
        .into_iter()
        .map(|record| {
            let short_url = state.url_service.get_short_url(&record.short_id);
            UrlResponse {
                short_id: record.short_id,
                short_url,
                original_url: record.original_url,
            }
        })
        .collect();

    Ok(Json(items))
}

/// Replaces a stored URL record.
///
/// # Endpoint
///
/// `PUT /urls/{short_id}`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://new-destination.example",
///   "short_id": "newid1"
/// }
/// ```
///
/// Both fields replace the stored record atomically. After a successful
/// update the old short id no longer resolves.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
/// Returns 409 Conflict if the new short id is taken by another record.
/// Returns 400 Bad Request when either field is empty.
pub async fn update_url_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let update = UrlUpdate {
        original_url: payload.original_url,
        short_id: payload.short_id,
    };

    let record = state.url_service.update_url(&short_id, update).await?;
    let short_url = state.url_service.get_short_url(&record.short_id);

    Ok(Json(UrlResponse {
        short_id: record.short_id,
        short_url,
        original_url: record.original_url,
    }))
}

/// Deletes a stored URL record.
///
/// # Endpoint
///
/// `DELETE /urls/{short_id}`
///
/// # Response
///
/// `200 OK` with the removed record, so the caller can confirm what was
/// deleted.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn delete_url_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let record = state.url_service.delete_url(&short_id).await?;
    let short_url = state.url_service.get_short_url(&record.short_id);

    Ok(Json(UrlResponse {
        short_id: record.short_id,
        short_url,
        original_url: record.original_url,
    }))
}
