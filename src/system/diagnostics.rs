use std::time::Duration;

use tracing::{debug, info};

use crate::app::RunPhase;
use crate::http::RequestOutcome;
use crate::metrics::LoadTestSummary;

/// Observer the orchestrator and workers report to.
///
/// Calls are made inline from worker tasks and must return promptly; an
/// implementation must never block on I/O.
pub trait Diagnostics: Send + Sync {
    fn phase_changed(&self, _phase: RunPhase) {}

    fn request_outcome(&self, _worker_id: usize, _outcome: &RequestOutcome, _latency: Duration) {}

    fn worker_finished(&self, _worker_id: usize, _attempts: u64) {}

    fn summary(&self, _summary: &LoadTestSummary) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {}

/// Emits structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn phase_changed(&self, phase: RunPhase) {
        debug!(phase = phase.as_str(), "run phase changed");
    }

    fn request_outcome(&self, worker_id: usize, outcome: &RequestOutcome, latency: Duration) {
        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        match outcome {
            RequestOutcome::Success { status } => {
                debug!(worker_id, status, latency_ms, "request succeeded");
            }
            RequestOutcome::FailureStatus { status } => {
                debug!(worker_id, status, latency_ms, "request failed with status");
            }
            RequestOutcome::FailureError(err) => {
                debug!(
                    worker_id,
                    kind = err.kind.as_str(),
                    latency_ms,
                    error = %err.message,
                    "request failed"
                );
            }
        }
    }

    fn worker_finished(&self, worker_id: usize, attempts: u64) {
        debug!(worker_id, attempts, "virtual user finished");
    }

    fn summary(&self, summary: &LoadTestSummary) {
        info!(
            test_id = %summary.test_id,
            target_url = %summary.target_url,
            duration_seconds = %summary.duration_seconds,
            successful_requests = summary.successful_requests,
            failed_requests = summary.failed_requests,
            transactions_per_second = %summary.transactions_per_second,
            "load test completed"
        );
    }
}
