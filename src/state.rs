//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RelayService;

/// State cloned into every request.
///
/// Holds no mutable data; requests never observe each other.
#[derive(Clone)]
pub struct AppState {
    pub relay_service: Arc<RelayService>,
}

impl AppState {
    pub fn new(relay_service: Arc<RelayService>) -> Self {
        Self { relay_service }
    }
}
