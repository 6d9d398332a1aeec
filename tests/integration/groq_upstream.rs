//! End-to-end tests through `GroqClient` against a mock Groq server
//!
//! - Outbound auth/content-type headers and body
//! - Relay of upstream status and body text
//! - Transport and decode failures

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use chatbot_proxy::chat::SYSTEM_PREAMBLE;

use crate::common::{constants::TEST_GROQ_API_KEY, groq_server, test_data};
use crate::mocks::{spawn_truncated_upstream, MockGroq};

#[tokio::test]
async fn test_forwards_with_bearer_credential() {
    let groq = MockGroq::start().await;
    groq.mock_chat_completion_success(TEST_GROQ_API_KEY, test_data::hello_completion())
        .await;
    let server = groq_server(&groq.base_url(), Some(TEST_GROQ_API_KEY));

    let response = server.post("/").json(&test_data::hello_request()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), test_data::hello_completion());

    let bodies = groq.received_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [
                { "role": "system", "content": SYSTEM_PREAMBLE },
                { "role": "user", "content": "Hi" }
            ],
            "temperature": 0.7,
            "max_tokens": 1024,
            "top_p": 1,
            "stream": false
        })
    );
}

#[tokio::test]
async fn test_client_headers_are_not_forwarded() {
    let groq = MockGroq::start().await;
    groq.mock_chat_completion_success(TEST_GROQ_API_KEY, test_data::hello_completion())
        .await;
    let server = groq_server(&groq.base_url(), Some(TEST_GROQ_API_KEY));

    server
        .post("/")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer browser-token"),
        )
        .add_header(header::COOKIE, HeaderValue::from_static("session=abc"))
        .json(&test_data::hello_request())
        .await;

    let requests = groq.received_requests().await;
    assert_eq!(requests.len(), 1);
    let headers = &requests[0].headers;
    assert_eq!(
        headers.get("authorization").unwrap().to_str().unwrap(),
        format!("Bearer {}", TEST_GROQ_API_KEY)
    );
    assert!(headers.get("cookie").is_none());
}

#[tokio::test]
async fn test_upstream_rate_limit_is_relayed() {
    let groq = MockGroq::start().await;
    groq.mock_chat_completion_error(429, "rate limited").await;
    let server = groq_server(&groq.base_url(), Some(TEST_GROQ_API_KEY));

    let response = server.post("/").json(&test_data::hello_request()).await;

    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Groq API error", "details": "rate limited" })
    );
}

#[tokio::test]
async fn test_upstream_json_error_body_is_relayed_as_text() {
    let groq = MockGroq::start().await;
    let upstream_error = r#"{"error":{"message":"The model `nope` does not exist","type":"invalid_request_error"}}"#;
    groq.mock_chat_completion_error(404, upstream_error).await;
    let server = groq_server(&groq.base_url(), Some(TEST_GROQ_API_KEY));

    let response = server
        .post("/")
        .json(&json!({ "messages": [], "model": "nope" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Groq API error");
    assert_eq!(body["details"], upstream_error);
}

#[tokio::test]
async fn test_unreadable_upstream_error_body_is_internal_error() {
    let base_url = spawn_truncated_upstream("429 Too Many Requests", 100, "rate").await;
    let server = groq_server(&base_url, Some(TEST_GROQ_API_KEY));

    let response = server.post("/").json(&test_data::hello_request()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Internal server error");
    assert!(body.get("details").is_none());
    let message = body["message"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(!message.contains(TEST_GROQ_API_KEY));
}

#[tokio::test]
async fn test_malformed_upstream_json_is_internal_error() {
    let groq = MockGroq::start().await;
    groq.mock_chat_completion_malformed().await;
    let server = groq_server(&groq.base_url(), Some(TEST_GROQ_API_KEY));

    let response = server.post("/").json(&test_data::hello_request()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Internal server error");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    // Nothing listens on port 1
    let server = groq_server("http://127.0.0.1:1/openai/v1", Some(TEST_GROQ_API_KEY));

    let response = server.post("/").json(&test_data::hello_request()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Internal server error");
    let message = body["message"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(!message.contains(TEST_GROQ_API_KEY));
}

#[tokio::test]
async fn test_missing_api_key_is_internal_error() {
    let groq = MockGroq::start().await;
    let server = groq_server(&groq.base_url(), None);

    let response = server.post("/").json(&test_data::hello_request()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Internal server error", "message": "GROQ_API_KEY is not configured" })
    );
    assert!(groq.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_error_responses_never_echo_the_key() {
    let groq = MockGroq::start().await;
    groq.mock_chat_completion_error(401, "Invalid API Key").await;
    let server = groq_server(&groq.base_url(), Some(TEST_GROQ_API_KEY));

    let response = server.post("/").json(&test_data::hello_request()).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(!response.text().contains(TEST_GROQ_API_KEY));
}
