use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A response arrived with a non-2xx status.
    Status,
    /// No response: connect, timeout, DNS or protocol error.
    Transport,
}

/// Lock-free outcome counters shared by every virtual user of a run.
///
/// Increments use relaxed ordering; the orchestrator only reads a snapshot
/// after joining all workers, and the join provides the happens-before edge.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    successes: AtomicU64,
    status_failures: AtomicU64,
    transport_failures: AtomicU64,
}

impl ResultAggregator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            successes: AtomicU64::new(0),
            status_failures: AtomicU64::new(0),
            transport_failures: AtomicU64::new(0),
        }
    }

    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, kind: FailureKind) {
        let counter = match kind {
            FailureKind::Status => &self.status_failures,
            FailureKind::Transport => &self.transport_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of the counters. Only final once every worker has terminated.
    #[must_use]
    pub fn counts(&self) -> ResultCounts {
        ResultCounts {
            successful: self.successes.load(Ordering::Relaxed),
            status_failures: self.status_failures.load(Ordering::Relaxed),
            transport_failures: self.transport_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCounts {
    pub successful: u64,
    pub status_failures: u64,
    pub transport_failures: u64,
}

impl ResultCounts {
    #[must_use]
    pub const fn failed(&self) -> u64 {
        self.status_failures.saturating_add(self.transport_failures)
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.successful.saturating_add(self.failed())
    }
}
