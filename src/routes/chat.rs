//! Chat relay endpoint
//!
//! Receives the widget's conversation, prepends the system preamble and
//! relays it to the upstream provider.

use std::sync::Arc;
use std::time::Instant;

use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{warn, Instrument};

use crate::{
    chat::{ChatRequest, UpstreamRequest},
    error::{AppResult, ProxyError},
    proxy::RequestContext,
    routes::metrics::{record_request, record_upstream_error},
    AppState,
};

/// Handle a chat request
///
/// Pipeline: read body, validate `messages`, forward upstream, relay the
/// answer. Each failure class ends the pipeline with its own status.
pub async fn chat_proxy(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response, ProxyError> {
    let start_time = Instant::now();

    let result = relay(&state, request).await;

    let duration = start_time.elapsed().as_secs_f64();
    match &result {
        Ok(_) => record_request("success", duration),
        Err(err) => {
            if let ProxyError::Upstream { status, .. } = err {
                record_upstream_error(status.as_u16());
            }
            record_request(err.outcome(), duration);
        }
    }

    result
}

async fn relay(state: &AppState, request: Request) -> AppResult<Response> {
    let body = axum::body::to_bytes(request.into_body(), state.config.max_body_bytes)
        .await
        .map_err(|e| ProxyError::Internal(anyhow!("Failed to read request body: {}", e)))?;

    let chat_request = ChatRequest::from_slice(&body).map_err(|err| {
        warn!(error = %err, body_len = body.len(), "Rejected chat request body");
        err
    })?;

    let ctx = RequestContext::new(state.upstream.name())
        .with_model(chat_request.model_label())
        .with_message_count(chat_request.messages.len());
    ctx.log_request_start();

    let upstream_request = UpstreamRequest::from(chat_request);

    let completion = state
        .upstream
        .send(&upstream_request)
        .instrument(ctx.create_span())
        .await
        .map_err(|err| {
            ctx.log_failure(&err);
            err
        })?;

    ctx.log_request_complete();

    Ok((StatusCode::OK, Json(completion)).into_response())
}

/// CORS preflight
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

/// Any method other than POST or OPTIONS
pub async fn method_not_allowed() -> ProxyError {
    ProxyError::MethodNotAllowed
}
