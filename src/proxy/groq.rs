//! Groq chat-completion client
//!
//! Forwards requests to Groq's OpenAI-compatible API.

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::headers::build_default_headers;
use super::provider::ChatUpstream;
use crate::chat::UpstreamRequest;
use crate::config::Config;
use crate::error::{AppResult, ProxyError};
use crate::secret::SecretString;

/// Groq API client
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl GroqClient {
    /// Create a new Groq client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.groq_api_url.clone(),
            api_key: config.groq_api_key.clone(),
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatUpstream for GroqClient {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip_all, fields(provider = "groq", messages = request.messages.len()))]
    async fn send(&self, request: &UpstreamRequest) -> AppResult<Value> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ProxyError::Internal(anyhow!("GROQ_API_KEY is not configured")))?;

        let url = self.chat_completions_url();
        debug!(url = %url, "Sending request to Groq");

        let response = self
            .client
            .post(&url)
            .headers(build_default_headers(api_key)?)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request to Groq");
                e
            })?;

        let status = response.status();
        debug!(url = %url, status = %status, "Received response from Groq");

        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                error!(status = %status, error = %e, "Failed to read Groq error body");
                e
            })?;
            error!(status = %status, body = %body, "Groq API error");
            return Err(ProxyError::Upstream { status, body });
        }

        let completion: Value = response.json().await?;
        Ok(completion)
    }
}
