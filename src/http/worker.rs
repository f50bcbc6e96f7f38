use std::sync::Arc;

use reqwest::Url;
use tokio::task::yield_now;
use tokio::time::{Instant, sleep_until};

use crate::app::TestWindow;
use crate::metrics::ResultAggregator;
use crate::shutdown::CancelToken;
use crate::system::Diagnostics;

use super::outcome::RequestOutcome;
use super::rate::RateLimiter;
use super::transport::Transport;

/// One simulated client. Owns its transport for its whole lifetime.
pub(crate) struct VirtualUser {
    pub(crate) id: usize,
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) limiter: RateLimiter,
    pub(crate) target: Arc<Url>,
    pub(crate) window: TestWindow,
    pub(crate) aggregator: Arc<ResultAggregator>,
    pub(crate) diagnostics: Arc<dyn Diagnostics>,
    pub(crate) cancel: CancelToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkerReport {
    pub(crate) attempts: u64,
}

impl VirtualUser {
    /// Issues paced requests until the window closes or the run is cancelled.
    ///
    /// In-flight requests are allowed to finish and are always recorded.
    pub(crate) async fn run(self) -> WorkerReport {
        let mut attempts: u64 = 0;

        loop {
            let started = Instant::now();
            if self.cancel.is_cancelled() || self.window.is_closed(started) {
                break;
            }
            let next_allowed = self.limiter.next_allowed(started, self.window.end());

            let outcome = RequestOutcome::classify(self.transport.send(&self.target).await);
            let latency = started.elapsed();
            attempts = attempts.saturating_add(1);

            match outcome.failure_kind() {
                None => self.aggregator.record_success(),
                Some(kind) => self.aggregator.record_failure(kind),
            }
            self.diagnostics.request_outcome(self.id, &outcome, latency);

            if RateLimiter::remaining(next_allowed, Instant::now()).is_some() {
                tokio::select! {
                    () = sleep_until(next_allowed) => {}
                    () = self.cancel.cancelled() => break,
                }
            } else {
                // Behind schedule: still give other virtual users a turn.
                yield_now().await;
            }
        }

        self.diagnostics.worker_finished(self.id, attempts);
        WorkerReport { attempts }
    }
}
