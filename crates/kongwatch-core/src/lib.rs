//! kongwatch core: the decoded access-event model and the metrics registry.
//!
//! This crate defines the Kong access record as it arrives on the wire, the
//! error surface, and the in-process metric aggregates (counters and
//! summaries) with their Prometheus text exposition. It intentionally
//! carries no HTTP or runtime dependencies so the aggregation core can be
//! tested without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `KongwatchError`/`Result` so a
//! malformed gateway payload can never crash the exporter.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod ingest;
pub mod metrics;

/// Shared result type.
pub use error::{KongwatchError, Result};
