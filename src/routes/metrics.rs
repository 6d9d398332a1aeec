//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "chatbot_proxy_requests_total",
        "Total number of chat requests processed"
    );
    metrics::describe_counter!(
        "chatbot_proxy_upstream_errors_total",
        "Non-2xx answers from the upstream provider"
    );
    metrics::describe_histogram!(
        "chatbot_proxy_request_duration_seconds",
        "Chat request duration in seconds"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a finished chat request
pub fn record_request(outcome: &str, duration_secs: f64) {
    metrics::counter!("chatbot_proxy_requests_total", "outcome" => outcome.to_string())
        .increment(1);
    metrics::histogram!("chatbot_proxy_request_duration_seconds").record(duration_secs);
}

/// Record an upstream rejection by status code
pub fn record_upstream_error(status: u16) {
    metrics::counter!("chatbot_proxy_upstream_errors_total", "status" => status.to_string())
        .increment(1);
}
