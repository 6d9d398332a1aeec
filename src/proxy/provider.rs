//! Upstream provider abstraction
//!
//! The handler only talks to [`ChatUpstream`], so tests can swap the real
//! HTTP client for a stub.

use async_trait::async_trait;
use serde_json::Value;

use crate::chat::UpstreamRequest;
use crate::error::AppResult;

/// Trait defining the interface for chat-completion providers
///
/// # Security
///
/// Implementations MUST:
/// - Never forward client headers to the provider
/// - Take the credential from configuration, never from the request
/// - Keep the credential out of logs and error messages
#[async_trait]
pub trait ChatUpstream: Send + Sync {
    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Whether the provider has the credential it needs
    fn is_configured(&self) -> bool {
        true
    }

    /// Send one non-streaming chat completion request
    ///
    /// Returns the provider's JSON body on success and
    /// [`ProxyError::Upstream`](crate::error::ProxyError::Upstream) with the
    /// provider's status and body text on a non-2xx answer.
    async fn send(&self, request: &UpstreamRequest) -> AppResult<Value>;
}
