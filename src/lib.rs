//! Core library for the `vuload` CLI.
//!
//! The engine drives a fixed number of independent virtual users against one
//! HTTP endpoint for a fixed wall-clock window. Each virtual user paces its
//! own requests, outcomes are folded into shared lock-free counters, and a
//! single [`metrics::LoadTestSummary`] is produced once every worker has
//! joined. [`app::LoadTestOrchestrator`] is the entry point for library use;
//! transports, diagnostics and summary sinks are pluggable traits.
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod shutdown;
pub mod sinks;
pub mod system;

mod entry;
mod shutdown_handlers;

pub use entry::run;
