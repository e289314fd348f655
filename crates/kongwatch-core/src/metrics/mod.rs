//! In-process metric aggregates with Prometheus text exposition.
//!
//! Counter and summary families with label schemas fixed at registration,
//! backed by `DashMap`: each observed label-value tuple owns its own cell,
//! so updates to different tuples never contend and updates to the same
//! tuple are atomic (counters, sums) or serialized by a per-cell mutex
//! (quantile histograms). Cells are created lazily on first update; a tuple
//! that was never observed does not appear in the exposition output.

pub mod counter;
pub mod registry;
pub mod summary;

pub use counter::CounterVec;
pub use registry::Registry;
pub use summary::SummaryVec;

/// Escape a label value for the text exposition format.
pub(crate) fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Render one `name="value"` pair list from a schema and a value tuple.
pub(crate) fn format_labels(names: &[String], values: &[String]) -> String {
    names
        .iter()
        .zip(values.iter())
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}
