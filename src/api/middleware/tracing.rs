//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request. Arrival is logged at `DEBUG` so the
/// default filter keeps one line per request: the status and latency in
/// milliseconds when the response is produced. A 5xx (relay down or an
/// unscrapable relay answer) is additionally reported as a failure at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/expand/aHR0cDovL2V4YW1wbGUuY29t version=HTTP/1.1}: finished processing request latency=84 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
