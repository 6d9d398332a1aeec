//! Health and metrics endpoint tests
//!
//! - GET /health - Full health check
//! - GET /health/ready - Readiness probe
//! - GET /health/live - Liveness probe
//! - GET /metrics - Only when enabled

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::Value;

use chatbot_proxy::{routes, AppState};

use crate::common::{stub_server, test_config, test_data, StubReply, StubUpstream};

fn configured_server() -> TestServer {
    stub_server(StubUpstream::new(StubReply::Completion(
        test_data::hello_completion(),
    )))
}

#[tokio::test]
async fn test_health_check_reports_configured_upstream() {
    let server = configured_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["timestamp"].is_string());
    assert_eq!(body["checks"]["upstream"]["provider"], "stub");
    assert_eq!(body["checks"]["upstream"]["configured"], true);
}

#[tokio::test]
async fn test_health_check_degraded_without_credential() {
    let server = stub_server(StubUpstream::unconfigured());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["upstream"]["status"], "unhealthy");
    assert_eq!(body["checks"]["upstream"]["configured"], false);
}

#[tokio::test]
async fn test_readiness() {
    let ready = configured_server().get("/health/ready").await;
    assert_eq!(ready.status_code(), StatusCode::OK);
    assert_eq!(ready.json::<Value>()["status"], "healthy");

    let not_ready = stub_server(StubUpstream::unconfigured())
        .get("/health/ready")
        .await;
    assert_eq!(not_ready.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(not_ready.json::<Value>()["status"], "unhealthy");
}

#[tokio::test]
async fn test_liveness() {
    let response = stub_server(StubUpstream::unconfigured())
        .get("/health/live")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "healthy");
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_metrics_hidden_by_default() {
    let response = configured_server().get("/metrics").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_exposed_when_enabled() {
    let mut config = test_config("http://stub.invalid", Some("k"));
    config.metrics_enabled = true;
    routes::metrics::init_metrics();

    let upstream = StubUpstream::new(StubReply::Completion(test_data::hello_completion()));
    let state = Arc::new(AppState::with_upstream(config, upstream));
    let server = TestServer::new(routes::create_router(state)).unwrap();

    server.post("/").json(&test_data::hello_request()).await;
    let response = server.get("/metrics").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("chatbot_proxy_requests_total"));
}
