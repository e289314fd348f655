//! Labeled monotonic counters.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::format_labels;

/// A family of monotonic counters sharing one label schema.
///
/// The ordered label names are fixed when the family is registered; only
/// the values vary per update. Cells are keyed by the ordered value tuple,
/// so no sorting happens on the hot path.
#[derive(Debug)]
pub struct CounterVec {
    label_names: Vec<String>,
    cells: DashMap<Vec<String>, AtomicU64>,
}

impl CounterVec {
    pub(crate) fn new(label_names: &[&str]) -> Self {
        Self {
            label_names: label_names.iter().map(|s| s.to_string()).collect(),
            cells: DashMap::new(),
        }
    }

    /// Ordered label names fixed at registration.
    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    /// Increment by 1.
    pub fn inc(&self, values: &[&str]) {
        self.add(values, 1);
    }

    /// Increment by an arbitrary value. `values` must follow the registered
    /// label order.
    pub fn add(&self, values: &[&str], v: u64) {
        debug_assert_eq!(values.len(), self.label_names.len());
        let key: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        let cell = self.cells.entry(key).or_insert_with(|| AtomicU64::new(0));
        cell.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a tuple, if it was ever touched.
    pub fn get(&self, values: &[&str]) -> Option<u64> {
        let key: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        self.cells.get(&key).map(|c| c.load(Ordering::Relaxed))
    }

    /// Render in Prometheus text exposition format.
    pub(crate) fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.cells.iter() {
            let labels = format_labels(&self.label_names, r.key());
            let val = r.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{}{{{}}} {}", name, labels, val);
        }
    }
}
