//! Process-level plumbing: log subscriber setup and the diagnostics capability.
pub mod diagnostics;
pub mod logger;

pub use diagnostics::{Diagnostics, NoopDiagnostics, TracingDiagnostics};
