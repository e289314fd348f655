//! Event ingestor: decode one access record and update the aggregates.
//!
//! Label values flow through one struct per metric so a label-order mistake
//! is a compile error rather than a runtime cardinality surprise.

use std::sync::Arc;

use crate::error::Result;
use crate::event::{self, AccessEvent};
use crate::metrics::{CounterVec, Registry, SummaryVec};

/// Labels for `total_request_count`.
pub struct RequestCountLabels<'a> {
    pub status: &'a str,
    pub service_name: &'a str,
}

impl<'a> RequestCountLabels<'a> {
    fn values(&self) -> [&'a str; 2] {
        [self.status, self.service_name]
    }
}

/// Labels for `response_time_ms`. `method` carries the request path: the
/// original exporter fed the URI into this label and downstream dashboards
/// key on it, so the mapping is kept. The HTTP verb lives in `method_type`.
pub struct ResponseTimeLabels<'a> {
    pub method: &'a str,
    pub service_name: &'a str,
    pub status: &'a str,
    pub method_type: &'a str,
    pub consumer_name: &'a str,
}

impl<'a> ResponseTimeLabels<'a> {
    fn values(&self) -> [&'a str; 5] {
        [
            self.method,
            self.service_name,
            self.status,
            self.method_type,
            self.consumer_name,
        ]
    }
}

/// Labels for `consumer_request_time_ms`.
pub struct ConsumerTimeLabels<'a> {
    pub service_name: &'a str,
    pub consumer_name: &'a str,
}

impl<'a> ConsumerTimeLabels<'a> {
    fn values(&self) -> [&'a str; 2] {
        [self.service_name, self.consumer_name]
    }
}

/// The three aggregate families the exporter maintains.
pub struct KongMetrics {
    total_requests: Arc<CounterVec>,
    response_time_ms: Arc<SummaryVec>,
    consumer_request_time_ms: Arc<SummaryVec>,
}

impl KongMetrics {
    /// Register the three families. Conflicts are startup-fatal for the
    /// caller; this is the only place the schemas are spelled out.
    pub fn register(registry: &Registry) -> Result<Self> {
        Ok(Self {
            total_requests: registry.register_counter(
                "total_request_count",
                "Total requests by status and service",
                &["status", "service_name"],
            )?,
            response_time_ms: registry.register_summary(
                "response_time_ms",
                "Request completed time in milliseconds",
                &["method", "service_name", "status", "method_type", "consumer_name"],
            )?,
            consumer_request_time_ms: registry.register_summary(
                "consumer_request_time_ms",
                "Request completed time in milliseconds per consumer",
                &["service_name", "consumer_name"],
            )?,
        })
    }

    /// Apply one decoded event to all three families. Unconditional: empty
    /// strings and zero latencies are recorded as-is, and the three updates
    /// carry no ordering guarantee among themselves.
    pub fn record(&self, ev: &AccessEvent) {
        let status = ev.response.status.to_string();
        let latency_ms = ev.latencies.request.max(0) as u64;

        self.response_time_ms.observe(
            &ResponseTimeLabels {
                method: &ev.request.uri,
                service_name: &ev.service.name,
                status: &status,
                method_type: &ev.request.method,
                consumer_name: &ev.consumer.username,
            }
            .values(),
            latency_ms,
        );
        self.total_requests.inc(
            &RequestCountLabels {
                status: &status,
                service_name: &ev.service.name,
            }
            .values(),
        );
        self.consumer_request_time_ms.observe(
            &ConsumerTimeLabels {
                service_name: &ev.service.name,
                consumer_name: &ev.consumer.username,
            }
            .values(),
            latency_ms,
        );
    }

    pub fn total_requests(&self) -> &CounterVec {
        &self.total_requests
    }

    pub fn response_time_ms(&self) -> &SummaryVec {
        &self.response_time_ms
    }

    pub fn consumer_request_time_ms(&self) -> &SummaryVec {
        &self.consumer_request_time_ms
    }
}

/// Stateless ingest front: decode, then record.
pub struct Ingestor {
    metrics: KongMetrics,
}

impl Ingestor {
    pub fn new(registry: &Registry) -> Result<Self> {
        Ok(Self {
            metrics: KongMetrics::register(registry)?,
        })
    }

    /// Decode a raw body and update the aggregates. Returns the decoded
    /// event so the caller can log it; on decode failure nothing is
    /// touched.
    pub fn ingest(&self, raw: &[u8]) -> Result<AccessEvent> {
        let ev = event::decode(raw)?;
        self.metrics.record(&ev);
        Ok(ev)
    }

    pub fn metrics(&self) -> &KongMetrics {
        &self.metrics
    }
}
