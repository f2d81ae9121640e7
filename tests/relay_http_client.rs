use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use relay_gateway::application::services::RelayService;
use relay_gateway::domain::{RelayClient, RelayError};
use relay_gateway::infrastructure::relay::HttpRelayClient;
use relay_gateway::routes::app_router;
use relay_gateway::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_relay(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Url::parse(&format!("http://{addr}/")).unwrap()
}

/// Relay client that ignores proxy settings from the environment.
fn local_client(timeout: Option<Duration>) -> HttpRelayClient {
    let mut builder = reqwest::Client::builder().no_proxy();

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    HttpRelayClient::from_client(builder.build().unwrap())
}

fn fake_relay() -> Router {
    Router::new()
        .route(
            "/known",
            get(|| async { "resolved record https://example.org/page" }),
        )
        .route(
            "/gone",
            get(|| async { (StatusCode::NOT_FOUND, "no such key") }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "https://example.org/") }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "https://example.org/late"
            }),
        )
}

#[tokio::test]
async fn test_fetch_success_returns_body() {
    let base = spawn_relay(fake_relay()).await;
    let client = local_client(None);

    let body = client.fetch(&base.join("known").unwrap()).await.unwrap();

    assert_eq!(
        body.as_deref(),
        Some("resolved record https://example.org/page")
    );
}

#[tokio::test]
async fn test_fetch_non_success_returns_none() {
    let base = spawn_relay(fake_relay()).await;
    let client = local_client(None);

    assert_eq!(client.fetch(&base.join("gone").unwrap()).await.unwrap(), None);
    assert_eq!(client.fetch(&base.join("broken").unwrap()).await.unwrap(), None);
    assert_eq!(
        client.fetch(&base.join("unrouted").unwrap()).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_fetch_unreachable_relay() {
    // grab a free port, then close it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = local_client(None);
    let url = Url::parse(&format!("http://{addr}/known")).unwrap();

    let result = client.fetch(&url).await;

    assert!(matches!(result, Err(RelayError::Transport(_))));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let base = spawn_relay(fake_relay()).await;
    let client = local_client(Some(Duration::from_millis(200)));

    let result = client.fetch(&base.join("slow").unwrap()).await;

    assert!(matches!(result, Err(RelayError::Transport(_))));
}

#[tokio::test]
async fn test_gateway_against_local_relay() {
    let base = spawn_relay(fake_relay()).await;
    let client = local_client(Some(Duration::from_secs(2)));
    let service = RelayService::new(Arc::new(client), base);

    let server = TestServer::new(app_router(AppState::new(Arc::new(service)))).unwrap();

    let response = server.get("/expand/known").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.org/page");

    let response = server.get("/expand/gone").await;
    response.assert_status_not_found();

    let response = server.get("/expand/slow").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_new_builds_with_and_without_timeout() {
    assert!(HttpRelayClient::new(None).is_ok());
    assert!(HttpRelayClient::new(Some(Duration::from_secs(1))).is_ok());
}
