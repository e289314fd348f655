//! kongwatch exporter binary.
//!
//! - `POST /kong`   : target for Kong's http-log plugin
//! - `GET /metrics` : Prometheus scrape endpoint
//!
//! Config comes from `kongwatch.yaml` (or the first CLI argument); a
//! missing file falls back to defaults (listen on 0.0.0.0:8080).

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use kongwatch_exporter::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "kongwatch.yaml".to_string());
    let cfg = config::load_or_default(&path).expect("config load failed");
    let listen: SocketAddr = cfg
        .exporter
        .listen
        .parse()
        .expect("exporter.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("metric registration failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "kongwatch-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
