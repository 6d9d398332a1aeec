//! HTTP routes for the chat proxy
//!
//! This module defines all HTTP endpoints exposed by the proxy.

pub mod chat;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // The browser widget is served from another origin
    let chat_routes = Router::new().route(
        "/",
        post(chat::chat_proxy)
            .options(chat::preflight)
            .fallback(chat::method_not_allowed),
    );

    let mut public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check));

    if state.config.metrics_enabled {
        public_routes = public_routes.route("/metrics", get(metrics::prometheus_metrics));
    }

    Router::new()
        .merge(public_routes)
        .merge(chat_routes)
        // Global middleware (applied to all routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                )),
        )
        .with_state(state)
}
