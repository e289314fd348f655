//! kongwatch exporter library entry.
//!
//! This crate wires config, shared state, the axum router, and the HTTP
//! handlers into a scrape-able exporter. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod router;
