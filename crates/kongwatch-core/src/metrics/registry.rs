//! Named-collector registry with text exposition.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{CounterVec, SummaryVec};
use crate::error::{KongwatchError, Result};

enum Collector {
    Counter(Arc<CounterVec>),
    Summary(Arc<SummaryVec>),
}

struct Entry {
    name: String,
    help: String,
    collector: Collector,
}

/// Process-wide collection of named metric families.
///
/// Populated at startup, shared for the process lifetime, entries are never
/// removed. Registering a name a second time with an identical kind and
/// label schema hands back the existing family; a differing registration is
/// an error so the caller can fail fast instead of serving an inconsistent
/// schema. The write lock is only taken during registration; scrapes take
/// the read side.
#[derive(Default)]
pub struct Registry {
    entries: RwLock<Vec<Entry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a counter family, or fetch the existing handle.
    pub fn register_counter(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
    ) -> Result<Arc<CounterVec>> {
        let mut entries = self.entries.write();
        if let Some(e) = entries.iter().find(|e| e.name == name) {
            return match &e.collector {
                Collector::Counter(c) if c.label_names() == label_names => Ok(Arc::clone(c)),
                _ => Err(conflict(name)),
            };
        }
        let counter = Arc::new(CounterVec::new(label_names));
        entries.push(Entry {
            name: name.to_string(),
            help: help.to_string(),
            collector: Collector::Counter(Arc::clone(&counter)),
        });
        Ok(counter)
    }

    /// Register a summary family, or fetch the existing handle.
    pub fn register_summary(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
    ) -> Result<Arc<SummaryVec>> {
        let mut entries = self.entries.write();
        if let Some(e) = entries.iter().find(|e| e.name == name) {
            return match &e.collector {
                Collector::Summary(s) if s.label_names() == label_names => Ok(Arc::clone(s)),
                _ => Err(conflict(name)),
            };
        }
        let summary = Arc::new(SummaryVec::new(label_names)?);
        entries.push(Entry {
            name: name.to_string(),
            help: help.to_string(),
            collector: Collector::Summary(Arc::clone(&summary)),
        });
        Ok(summary)
    }

    /// Point-in-time text exposition of every registered family, in
    /// registration order. Tuples never observed are absent; the view is
    /// consistent per cell, not atomic across metrics.
    pub fn render(&self) -> String {
        let entries = self.entries.read();
        let mut out = String::new();
        for e in entries.iter() {
            match &e.collector {
                Collector::Counter(c) => c.render(&e.name, &e.help, &mut out),
                Collector::Summary(s) => s.render(&e.name, &e.help, &mut out),
            }
        }
        out
    }
}

fn conflict(name: &str) -> KongwatchError {
    KongwatchError::MetricConflict(format!(
        "metric {name} already registered with a different shape"
    ))
}
