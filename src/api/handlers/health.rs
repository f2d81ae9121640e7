//! Handler for health check endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::HealthResponse;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The gateway has no dependencies worth probing: the relay is only contacted
/// on demand, so this always answers 200.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-05-01T12:00:00.000Z"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
