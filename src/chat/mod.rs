//! Chat request model
//!
//! Parses the browser's chat payload and builds the request sent upstream.

pub mod preamble;
pub mod types;

pub use preamble::{system_message, SYSTEM_PREAMBLE};
pub use types::{
    ChatMessage, ChatRequest, Role, UpstreamRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};
