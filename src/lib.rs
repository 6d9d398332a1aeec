//! Chat proxy for the Cores Assist website widget
//!
//! Accepts the widget's conversation, prepends a fixed system preamble,
//! attaches the server-side Groq credential and relays the completion back
//! to the browser with CORS headers.

pub mod chat;
pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;
pub mod secret;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppResult, ErrorEnvelope, ProxyError};
pub use crate::proxy::{ChatUpstream, GroqClient};

/// Application state shared across all request handlers
///
/// Immutable after construction; concurrent requests share it freely.
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Provider that chat requests are forwarded to
    pub upstream: Arc<dyn ChatUpstream>,
}

impl AppState {
    /// Create a new application state backed by the Groq API
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        let upstream: Arc<dyn ChatUpstream> = Arc::new(GroqClient::new(http_client, &config));

        Ok(Self::with_upstream(config, upstream))
    }

    /// Create an application state around an existing upstream
    ///
    /// Integration tests use this to plug in stubs or a client aimed at a
    /// mock server.
    pub fn with_upstream(config: Config, upstream: Arc<dyn ChatUpstream>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            upstream,
        }
    }
}
