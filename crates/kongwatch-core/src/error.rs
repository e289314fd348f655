//! Shared error type across kongwatch crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, KongwatchError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum KongwatchError {
    /// The request body did not decode into an access event. This is the
    /// only error the ingest boundary produces: the event is logged,
    /// answered with 400, and dropped for good.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// A metric name was registered twice with a different kind or
    /// label-set. Startup-fatal.
    #[error("metric conflict: {0}")]
    MetricConflict(String),
    /// Config parse or validation failure. Startup-fatal.
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}
