//! Request logging utilities
//!
//! Provides structured logging with correlation IDs for following one chat
//! request through the proxy.

use std::time::Instant;
use tracing::{error, info, warn, Span};
use uuid::Uuid;

use crate::error::ProxyError;

/// Context for tracking a request through the system
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Upstream provider handling this request
    pub provider: String,
    /// Model requested by the caller
    pub model: Option<String>,
    /// Number of caller messages (preamble excluded)
    pub message_count: usize,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider: provider.to_string(),
            model: None,
            message_count: 0,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_message_count(mut self, count: usize) -> Self {
        self.message_count = count;
        self
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log request initiation
    pub fn log_request_start(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            messages = %self.message_count,
            "Chat request started"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            elapsed_ms = %self.elapsed_ms(),
            "Chat request completed"
        );
    }

    /// Log request failure
    ///
    /// Upstream rejections are warnings; everything else is an error.
    pub fn log_failure(&self, err: &ProxyError) {
        match err {
            ProxyError::Upstream { status, .. } => warn!(
                trace_id = %self.trace_id,
                provider = %self.provider,
                model = ?self.model,
                status = %status,
                elapsed_ms = %self.elapsed_ms(),
                "Upstream rejected chat request"
            ),
            other => error!(
                trace_id = %self.trace_id,
                provider = %self.provider,
                model = ?self.model,
                elapsed_ms = %self.elapsed_ms(),
                error = %other,
                "Chat request failed"
            ),
        }
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "chat_request",
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
        )
    }
}
