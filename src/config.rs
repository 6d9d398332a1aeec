//! Configuration management for the chat proxy
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use crate::secret::SecretString;

/// Default upstream base URL (Groq's OpenAI-compatible API)
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Groq API base URL, without trailing slash
    pub groq_api_url: String,
    /// Groq API key. Requests fail with a 500 while this is unset.
    pub groq_api_key: Option<SecretString>,

    /// Upstream request timeout (in seconds)
    pub upstream_timeout_seconds: u64,
    /// Maximum accepted request body size (in bytes)
    pub max_body_bytes: usize,

    pub log_format: LogFormat,
    /// Expose the Prometheus `/metrics` endpoint
    pub metrics_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: var("CHATBOT_HOST", "0.0.0.0"),
            port: var("CHATBOT_PORT", "8080")
                .parse()
                .context("Invalid CHATBOT_PORT")?,

            groq_api_url: var("GROQ_API_URL", DEFAULT_GROQ_API_URL)
                .trim_end_matches('/')
                .to_string(),
            groq_api_key: lookup("GROQ_API_KEY")
                .map(|key| SecretString::from(key.trim()))
                .filter(|key| !key.is_empty()),

            upstream_timeout_seconds: var("UPSTREAM_TIMEOUT_SECONDS", "300")
                .parse()
                .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?,
            max_body_bytes: var("MAX_BODY_BYTES", "1048576")
                .parse()
                .context("Invalid MAX_BODY_BYTES")?,

            log_format: match var("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            metrics_enabled: lookup("CHATBOT_METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}
