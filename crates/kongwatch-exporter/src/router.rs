//! Axum router wiring.
//!
//! `/kong` receives access events, `/metrics` serves the scrape snapshot,
//! `/healthz` and `/readyz` are operational probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, http};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/kong", post(http::ingest_event))
        .route("/metrics", get(http::metrics))
        .route("/healthz", get(http::healthz))
        .route("/readyz", get(http::readyz))
        .with_state(state)
}
