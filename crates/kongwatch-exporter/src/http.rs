//! HTTP handlers: event intake plus the scrape/ops surface.
//!
//! Logging lives here, not in the core update path: the ingestor returns a
//! structured result and the handler decides what to emit, so the
//! aggregation core stays testable without capturing log output.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use kongwatch_core::event::AccessEvent;

use crate::app_state::AppState;

/// `POST /kong` — decode one access event and update the aggregates.
///
/// 200 with an empty body on success; 400 when the body does not decode.
/// A malformed event is logged and dropped, final.
pub async fn ingest_event(State(app): State<AppState>, body: Bytes) -> StatusCode {
    match app.ingestor().ingest(&body) {
        Ok(ev) => {
            log_event(&ev);
            StatusCode::OK
        }
        Err(e) => {
            tracing::warn!(error = %e, "access event decode failed");
            StatusCode::BAD_REQUEST
        }
    }
}

/// Fire-and-forget debug trace of the decoded sub-objects.
fn log_event(ev: &AccessEvent) {
    tracing::debug!(
        request = ?ev.request,
        response = ?ev.response,
        service = ?ev.service,
        consumer = ?ev.consumer,
        latencies = ?ev.latencies,
        client_ip = %ev.client_ip,
        "access event"
    );
}

/// `GET /metrics` — Prometheus text exposition.
pub async fn metrics(State(app): State<AppState>) -> Response {
    let body = app.registry().render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

/// `GET /healthz` — liveness.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// `GET /readyz` — readiness.
pub async fn readyz() -> impl IntoResponse {
    (StatusCode::OK, "ready")
}
