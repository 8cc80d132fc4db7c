//! Request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// `TraceLayer` with the standard HTTP failure classifier.
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Builds the tracing middleware applied to every route.
///
/// Each request opens an `INFO` span carrying the method, path, and HTTP
/// version; the matching response event records the status code and the
/// latency in milliseconds.
///
/// ```text
/// INFO request{method=GET uri=/Ab3xZ9 version=HTTP/1.1}: finished processing request latency=2 ms status=307
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
