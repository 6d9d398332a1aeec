//! Health check endpoints
//!
//! - `/health` - Full health check with upstream status
//! - `/health/ready` - Readiness probe
//! - `/health/live` - Liveness probe

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Health status enum
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Upstream provider check result
#[derive(Debug, Serialize)]
pub struct UpstreamCheck {
    pub status: HealthStatus,
    pub provider: &'static str,
    pub configured: bool,
}

#[derive(Debug, Serialize)]
pub struct DependencyChecks {
    pub upstream: UpstreamCheck,
}

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub checks: DependencyChecks,
}

/// Simple health response for liveness/readiness
#[derive(Debug, Serialize)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

/// The proxy has no network dependency worth pinging; the upstream only
/// needs a credential to be usable.
fn check_upstream(state: &AppState) -> UpstreamCheck {
    let configured = state.upstream.is_configured();

    UpstreamCheck {
        status: if configured {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        },
        provider: state.upstream.name(),
        configured,
    }
}

/// Full health check endpoint
///
/// A missing credential degrades the service but keeps the endpoint at 200,
/// since the process itself is running fine.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let upstream = check_upstream(&state);

    let overall_status = if upstream.configured {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: DependencyChecks { upstream },
    };

    (StatusCode::OK, Json(response))
}

/// Readiness probe endpoint
///
/// Returns 200 OK once chat requests can actually be forwarded.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SimpleHealthResponse>) {
    if !state.upstream.is_configured() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(SimpleHealthResponse {
                status: HealthStatus::Unhealthy,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}

/// Liveness probe endpoint
pub async fn liveness_check() -> (StatusCode, Json<SimpleHealthResponse>) {
    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}
