//! Proxy module
//!
//! Handles request forwarding to the upstream chat-completion provider.

pub mod groq;
pub mod headers;
pub mod logging;
pub mod provider;

pub use groq::GroqClient;
pub use logging::RequestContext;
pub use provider::ChatUpstream;
