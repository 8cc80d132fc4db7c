#![allow(dead_code)]

use std::sync::Arc;
use url_short::application::services::UrlService;
use url_short::infrastructure::persistence::MemoryUrlRepository;
use url_short::state::AppState;

pub const BASE_URL: &str = "http://127.0.0.1:8080";

/// Builds handler state backed by the in-memory repository.
///
/// Handler tests exercise the HTTP layer without a database; the
/// PostgreSQL repository has its own suite in `repository_pg.rs`.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryUrlRepository::new());
    let url_service = Arc::new(UrlService::new(repository, BASE_URL.to_string()));

    AppState::new(url_service)
}
