//! Decoded Kong access-log record.
//!
//! Field-for-field mirror of the JSON body Kong's http-log plugin posts.
//! Every field defaults when absent (Kong omits `consumer` entirely for
//! anonymous traffic) and unknown keys are ignored; real payloads carry far
//! more fields than the handful the metrics consume.

use serde::Deserialize;

use crate::error::{KongwatchError, Result};

/// One decoded access record. Created per inbound request, immutable,
/// discarded after the aggregates are updated.
#[derive(Debug, Default, Deserialize)]
pub struct AccessEvent {
    #[serde(default)]
    pub request: Request,
    #[serde(default)]
    pub response: Response,
    #[serde(default)]
    pub service: Service,
    #[serde(default)]
    pub consumer: Consumer,
    #[serde(default)]
    pub latencies: Latencies,
    #[serde(default)]
    pub client_ip: String,
}

/// Inbound request line.
#[derive(Debug, Default, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub method: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub status: i64,
}

/// Upstream service the gateway routed to.
#[derive(Debug, Default, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub name: String,
}

/// Authenticated consumer; all-defaults for anonymous traffic.
#[derive(Debug, Default, Deserialize)]
pub struct Consumer {
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub id: String,
}

/// Latency breakdown in milliseconds. Only `request` feeds the metrics;
/// `proxy` and `kong` are decoded for completeness.
#[derive(Debug, Default, Deserialize)]
pub struct Latencies {
    #[serde(default)]
    pub proxy: i64,
    #[serde(default)]
    pub kong: i64,
    #[serde(default)]
    pub request: i64,
}

/// Decode a raw request body into an [`AccessEvent`].
pub fn decode(raw: &[u8]) -> Result<AccessEvent> {
    serde_json::from_slice(raw)
        .map_err(|e| KongwatchError::MalformedPayload(format!("invalid access event json: {e}")))
}
