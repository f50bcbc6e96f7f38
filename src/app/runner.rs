use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::error::{AppError, AppResult, ConfigError};
use crate::http::{Transport, TransportFactory, VirtualUser};
use crate::metrics::{LoadTestSummary, ResultAggregator, SummaryContext, build_summary};
use crate::shutdown::CancelToken;
use crate::system::{Diagnostics, TracingDiagnostics};

use super::config::{LoadTestConfig, ValidatedConfig};
use super::phase::RunPhase;
use super::window::TestWindow;

/// Validates a config, drives the virtual users, and produces the summary.
///
/// The only synchronization it performs is joining every worker before the
/// counters are read.
pub struct LoadTestOrchestrator {
    transports: Arc<dyn TransportFactory>,
    diagnostics: Arc<dyn Diagnostics>,
    cancel: CancelToken,
    phase: watch::Sender<RunPhase>,
}

impl LoadTestOrchestrator {
    #[must_use]
    pub fn new(transports: Arc<dyn TransportFactory>) -> Self {
        let (phase, _rx) = watch::channel(RunPhase::Unstarted);
        Self {
            transports,
            diagnostics: Arc::new(TracingDiagnostics),
            cancel: CancelToken::new(),
            phase,
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Uses `cancel` to stop workers early; the run then completes normally
    /// with whatever was recorded.
    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    #[must_use]
    pub fn phase(&self) -> watch::Receiver<RunPhase> {
        self.phase.subscribe()
    }

    /// Runs one load test to completion.
    ///
    /// # Errors
    ///
    /// Returns a configuration error, or an HTTP error when a worker's client
    /// cannot be built. In both cases no worker has been started. Request
    /// failures never surface here; they are counted in the summary.
    pub async fn run(&self, config: &LoadTestConfig) -> AppResult<LoadTestSummary> {
        self.set_phase(RunPhase::Validating);
        let validated = match config.validate() {
            Ok(validated) => validated,
            Err(err) => return Err(self.reject(AppError::config(err))),
        };
        let transports = match self.open_transports(validated.virtual_users) {
            Ok(transports) => transports,
            Err(err) => return Err(self.reject(err)),
        };
        let Some(window) = TestWindow::open(validated.duration) else {
            return Err(self.reject(AppError::config(ConfigError::DurationTooLong {
                seconds: config.duration_seconds,
            })));
        };

        self.set_phase(RunPhase::Running);
        info!(
            url = %validated.url,
            virtual_users = validated.virtual_users,
            rate_per_virtual_user = config.rate_per_virtual_user,
            duration_seconds = config.duration_seconds,
            "starting load test"
        );
        let aggregator = Arc::new(ResultAggregator::new());
        let attempts = self
            .drive_workers(&validated, transports, window, &aggregator)
            .await;
        let elapsed = window.elapsed();

        self.set_phase(RunPhase::Aggregating);
        let counts = aggregator.counts();
        debug!(attempts, recorded = counts.total(), "all virtual users joined");
        let context = SummaryContext {
            test_id: config.test_id(),
            target_url: &config.target_url,
            virtual_users: validated.virtual_users,
            rate_per_virtual_user: config.rate_per_virtual_user,
            started_at: window.started_at(),
        };
        let summary = build_summary(counts, elapsed, &context);
        self.diagnostics.summary(&summary);
        self.set_phase(RunPhase::Completed);
        Ok(summary)
    }

    fn open_transports(&self, virtual_users: usize) -> AppResult<Vec<Box<dyn Transport>>> {
        (1..=virtual_users)
            .map(|worker_id| self.transports.open(worker_id).map_err(AppError::http))
            .collect()
    }

    async fn drive_workers(
        &self,
        validated: &ValidatedConfig,
        transports: Vec<Box<dyn Transport>>,
        window: TestWindow,
        aggregator: &Arc<ResultAggregator>,
    ) -> u64 {
        let target = Arc::new(validated.url.clone());
        let mut handles = Vec::with_capacity(transports.len());
        for (index, transport) in transports.into_iter().enumerate() {
            let worker = VirtualUser {
                id: index.saturating_add(1),
                transport,
                limiter: validated.limiter,
                target: Arc::clone(&target),
                window,
                aggregator: Arc::clone(aggregator),
                diagnostics: Arc::clone(&self.diagnostics),
                cancel: self.cancel.clone(),
            };
            handles.push(tokio::spawn(worker.run()));
        }

        let mut attempts: u64 = 0;
        for handle in handles {
            match handle.await {
                Ok(report) => attempts = attempts.saturating_add(report.attempts),
                Err(err) => error!("Virtual user task failed: {}", err),
            }
        }
        attempts
    }

    fn set_phase(&self, phase: RunPhase) {
        self.phase.send_replace(phase);
        self.diagnostics.phase_changed(phase);
    }

    fn reject(&self, err: AppError) -> AppError {
        error!("Load test rejected: {}", err);
        self.set_phase(RunPhase::Rejected);
        err
    }
}
