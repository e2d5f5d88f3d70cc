//! Axum router wiring.
//!
//! `/metrics` is mounted with `any` so method dispatch (and the 405 `Allow`
//! header) stays in one handler.

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let timeout = state.cfg().server.read_write_timeout();

    Router::new()
        .route("/metrics", any(transport::http::metrics_endpoint))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
