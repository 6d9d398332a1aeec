//! Error types for the chat proxy
//!
//! Every failure is converted into a well-formed response at the handler
//! boundary. JSON failures use the [`ErrorEnvelope`] shape the chat widget
//! understands.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Invalid messages format")]
    InvalidMessages,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The upstream provider answered with a non-2xx status
    #[error("Groq API error ({status}): {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ProxyError {
    /// HTTP status returned to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidMessages => StatusCode::BAD_REQUEST,
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Http(_) | ProxyError::Json(_) | ProxyError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short label for metrics and logs
    pub fn outcome(&self) -> &'static str {
        match self {
            ProxyError::InvalidMessages => "invalid_request",
            ProxyError::MethodNotAllowed => "method_not_allowed",
            ProxyError::Upstream { .. } => "upstream_error",
            ProxyError::Http(_) | ProxyError::Json(_) | ProxyError::Internal(_) => "internal_error",
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            message: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let envelope = match self {
            ProxyError::MethodNotAllowed => {
                return (
                    status,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    "Method not allowed",
                )
                    .into_response();
            }
            ProxyError::InvalidMessages => ErrorEnvelope::new("Invalid messages format"),
            ProxyError::Upstream { body, .. } => {
                ErrorEnvelope::new("Groq API error").with_details(body)
            }
            other => ErrorEnvelope::new("Internal server error").with_message(other.to_string()),
        };

        (status, Json(envelope)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, ProxyError>;
