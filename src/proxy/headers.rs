//! Header utilities for upstream requests
//!
//! Client headers are never copied to the provider; the outbound request
//! carries only the headers built here.

use anyhow::anyhow;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{AppResult, ProxyError};
use crate::secret::SecretString;

/// Build the headers for a chat-completion request
///
/// The Authorization value is flagged sensitive so it is masked in the
/// `Debug` output of the header map.
pub fn build_default_headers(api_key: &SecretString) -> AppResult<HeaderMap> {
    let mut authorization =
        HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret())).map_err(|_| {
            ProxyError::Internal(anyhow!("GROQ_API_KEY contains characters not valid in a header"))
        })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
