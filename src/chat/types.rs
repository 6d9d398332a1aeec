//! Request types exchanged with the browser and the upstream provider

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::preamble::system_message;
use crate::error::{AppResult, ProxyError};

/// Model used when the caller does not name one
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

impl From<ChatMessage> for Value {
    fn from(message: ChatMessage) -> Self {
        json!({
            "role": message.role.as_str(),
            "content": message.content,
        })
    }
}

/// Chat payload sent by the browser widget
///
/// Only the shape of `messages` is checked. Message entries and the optional
/// sampling fields are kept as raw JSON so they reach the provider exactly as
/// the caller sent them; defaults apply only to absent fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Value>,
    pub model: Value,
    pub temperature: Value,
    pub max_tokens: Value,
}

impl ChatRequest {
    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        let payload: Value = serde_json::from_slice(body)?;
        Self::from_value(payload)
    }

    /// Validate a decoded body and apply defaults
    pub fn from_value(payload: Value) -> AppResult<Self> {
        let Value::Object(mut fields) = payload else {
            return Err(ProxyError::InvalidMessages);
        };

        let messages = match fields.remove("messages") {
            Some(Value::Array(messages)) => messages,
            _ => return Err(ProxyError::InvalidMessages),
        };

        Ok(Self {
            messages,
            model: fields
                .remove("model")
                .unwrap_or_else(|| Value::from(DEFAULT_MODEL)),
            temperature: fields
                .remove("temperature")
                .unwrap_or_else(|| Value::from(DEFAULT_TEMPERATURE)),
            max_tokens: fields
                .remove("max_tokens")
                .unwrap_or_else(|| Value::from(DEFAULT_MAX_TOKENS)),
        })
    }

    /// Model name for logs and metrics
    pub fn model_label(&self) -> String {
        match &self.model {
            Value::String(model) => model.clone(),
            other => other.to_string(),
        }
    }
}

/// Body of the chat-completion call made to the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamRequest {
    pub model: Value,
    pub messages: Vec<Value>,
    pub temperature: Value,
    pub max_tokens: Value,
    pub top_p: u8,
    pub stream: bool,
}

impl From<ChatRequest> for UpstreamRequest {
    fn from(request: ChatRequest) -> Self {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(Value::from(system_message()));
        messages.extend(request.messages);

        Self {
            model: request.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: 1,
            stream: false,
        }
    }
}
