//! Handler for resolving a short id into a redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect_target::redirect_target;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Redirect Target
///
/// Stored URLs without an `http://` or `https://` scheme get `http://`
/// prepended here so the Location header is absolute, and header-unsafe
/// bytes are percent-encoded. The stored value itself is never rewritten.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let record = state.url_service.get_by_short_id(&short_id).await?;

    let target = redirect_target(&record.original_url);
    tracing::debug!(short_id, target, "redirecting");

    Ok(Redirect::temporary(&target))
}
