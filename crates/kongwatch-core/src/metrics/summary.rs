//! Labeled latency summaries: exact count/sum plus quantile estimates.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use hdrhistogram::Histogram;
use parking_lot::Mutex;

use super::format_labels;
use crate::error::{KongwatchError, Result};

/// Reported quantiles (the classic summary objectives).
const QUANTILES: [(f64, &str); 3] = [(50.0, "0.5"), (90.0, "0.9"), (99.0, "0.99")];

/// HdrHistogram range: 1 ms .. 1 h, 3 significant figures.
const HIST_LOW: u64 = 1;
const HIST_HIGH: u64 = 3_600_000;
const HIST_SIGFIG: u8 = 3;

#[derive(Debug)]
struct SummaryCell {
    count: AtomicU64,
    sum: AtomicU64,
    hist: Mutex<Histogram<u64>>,
}

impl SummaryCell {
    fn new(template: &Histogram<u64>) -> Self {
        Self {
            count: AtomicU64::new(0),
            sum: AtomicU64::new(0),
            hist: Mutex::new(template.clone()),
        }
    }
}

/// A family of summaries sharing one label schema.
///
/// Each observed tuple owns an independent cell: `count`/`sum` atomics for
/// exact totals plus an HdrHistogram behind its own mutex for quantiles.
/// Observations for different tuples never contend; the histogram lock is
/// the only critical section on the hot path and protects one cell.
#[derive(Debug)]
pub struct SummaryVec {
    label_names: Vec<String>,
    template: Histogram<u64>,
    cells: DashMap<Vec<String>, SummaryCell>,
}

impl SummaryVec {
    pub(crate) fn new(label_names: &[&str]) -> Result<Self> {
        // Built once here so lazy cell creation can clone instead of
        // re-running fallible construction.
        let template = Histogram::new_with_bounds(HIST_LOW, HIST_HIGH, HIST_SIGFIG)
            .map_err(|e| KongwatchError::Internal(format!("summary histogram: {e}")))?;
        Ok(Self {
            label_names: label_names.iter().map(|s| s.to_string()).collect(),
            template,
            cells: DashMap::new(),
        })
    }

    /// Ordered label names fixed at registration.
    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    /// Record one observation in milliseconds. `values` must follow the
    /// registered label order.
    pub fn observe(&self, values: &[&str], ms: u64) {
        debug_assert_eq!(values.len(), self.label_names.len());
        let key: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        let cell = self
            .cells
            .entry(key)
            .or_insert_with(|| SummaryCell::new(&self.template));
        cell.count.fetch_add(1, Ordering::Relaxed);
        cell.sum.fetch_add(ms, Ordering::Relaxed);
        // Quantized for quantiles only; count/sum above stay exact.
        cell.hist.lock().saturating_record(ms.max(HIST_LOW));
    }

    /// `(count, sum)` for a tuple, if it was ever observed.
    pub fn get(&self, values: &[&str]) -> Option<(u64, u64)> {
        let key: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        self.cells.get(&key).map(|c| {
            (
                c.count.load(Ordering::Relaxed),
                c.sum.load(Ordering::Relaxed),
            )
        })
    }

    /// Render in Prometheus text exposition format.
    pub(crate) fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} summary", name);
        for r in self.cells.iter() {
            let labels = format_labels(&self.label_names, r.key());
            let prefix = if labels.is_empty() {
                String::new()
            } else {
                format!("{},", labels)
            };
            let cell = r.value();

            {
                let hist = cell.hist.lock();
                for (q, tag) in QUANTILES {
                    let v = hist.value_at_percentile(q);
                    let _ = writeln!(out, "{}{{{}quantile=\"{}\"}} {}", name, prefix, tag, v);
                }
            }
            let sum = cell.sum.load(Ordering::Relaxed);
            let count = cell.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_sum{{{}}} {}", name, labels, sum);
            let _ = writeln!(out, "{}_count{{{}}} {}", name, labels, count);
        }
    }
}
