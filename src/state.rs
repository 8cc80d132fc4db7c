//! Shared application state.

use std::sync::Arc;

use crate::application::services::UrlService;

/// State injected into all handlers.
///
/// Cloning is cheap: the service is behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
