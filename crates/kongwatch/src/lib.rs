//! Top-level facade crate for kongwatch.
//!
//! Re-exports the aggregation core and the exporter library so users can
//! depend on a single crate.

pub mod core {
    pub use kongwatch_core::*;
}

pub mod exporter {
    pub use kongwatch_exporter::*;
}
