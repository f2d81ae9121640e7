#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use relay_gateway::application::services::RelayService;
use relay_gateway::domain::{RelayClient, RelayError};
use relay_gateway::routes::app_router;
use relay_gateway::state::AppState;
use std::sync::{Arc, Mutex};
use url::Url;

pub const TEST_RELAY_BASE: &str = "https://relay.test.example";

/// What the stub relay answers to every lookup.
#[derive(Clone)]
pub enum StubReply {
    Body(String),
    NotFound,
    Unreachable,
}

/// In-memory relay recording every URL it is asked for.
pub struct StubRelay {
    reply: StubReply,
    requests: Mutex<Vec<String>>,
}

impl StubRelay {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayClient for StubRelay {
    async fn fetch(&self, url: &Url) -> Result<Option<String>, RelayError> {
        self.requests.lock().unwrap().push(url.to_string());

        match &self.reply {
            StubReply::Body(body) => Ok(Some(body.clone())),
            StubReply::NotFound => Ok(None),
            StubReply::Unreachable => Err(RelayError::Transport(
                "error sending request: connection refused".to_string(),
            )),
        }
    }
}

pub fn create_test_state(reply: StubReply) -> (AppState, Arc<StubRelay>) {
    let relay = Arc::new(StubRelay::new(reply));
    let service = RelayService::new(relay.clone(), Url::parse(TEST_RELAY_BASE).unwrap());

    (AppState::new(Arc::new(service)), relay)
}

pub fn create_test_server(reply: StubReply) -> (TestServer, Arc<StubRelay>) {
    let (state, relay) = create_test_state(reply);
    let server = TestServer::new(app_router(state)).unwrap();

    (server, relay)
}
