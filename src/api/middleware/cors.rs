//! Cross-origin middleware.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the permissive CORS middleware.
///
/// # Behavior
///
/// - Every response gets `Access-Control-Allow-Origin: *`, errors included
/// - Every `OPTIONS` request is answered here with an empty 200 carrying the
///   allowed methods and headers; it never reaches the router
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/health", get(health_handler))
///     .layer(cors::layer());
/// ```
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
