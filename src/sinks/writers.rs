use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::LoadTestSummary;

use super::config::SinksConfig;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Destination for a finished run's summary.
///
/// Publishing happens after the summary is final; a sink can only report
/// failure, never change the result.
#[async_trait]
pub trait SummarySink: Send + Sync {
    fn name(&self) -> &str;

    /// Hands the summary to the destination.
    ///
    /// # Errors
    ///
    /// Returns an error when the summary could not be delivered.
    async fn publish(&self, summary: &LoadTestSummary) -> Result<(), SinkError>;
}

pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SummarySink for JsonFileSink {
    fn name(&self) -> &str {
        "summary-file"
    }

    async fn publish(&self, summary: &LoadTestSummary) -> Result<(), SinkError> {
        let mut body = serde_json::to_vec_pretty(summary)
            .map_err(|err| SinkError::Serialize { source: err })?;
        body.push(b'\n');
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|err| SinkError::WriteFile {
                path: self.path.clone(),
                source: err,
            })
    }
}

pub struct WebhookSink {
    client: Client,
    url: String,
}

impl WebhookSink {
    /// Builds a sink posting to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, SinkError> {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .map_err(|err| SinkError::WebhookClient { source: err })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SummarySink for WebhookSink {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn publish(&self, summary: &LoadTestSummary) -> Result<(), SinkError> {
        let response = self
            .client
            .post(&self.url)
            .json(summary)
            .send()
            .await
            .map_err(|err| SinkError::WebhookRequest {
                url: self.url.clone(),
                source: err,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::WebhookStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Builds the sinks named in `config`.
///
/// # Errors
///
/// Returns an error when a sink's client cannot be built.
pub fn build_sinks(config: &SinksConfig) -> AppResult<Vec<Box<dyn SummarySink>>> {
    let mut sinks: Vec<Box<dyn SummarySink>> = Vec::new();
    if let Some(path) = config.summary_file.as_ref() {
        sinks.push(Box::new(JsonFileSink::new(path)));
    }
    if let Some(url) = config.webhook_url.as_ref() {
        sinks.push(Box::new(WebhookSink::new(url).map_err(AppError::sink)?));
    }
    Ok(sinks)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub published: usize,
    pub failed: usize,
}

/// Publishes to every sink once. Failures are logged and counted, never
/// retried and never propagated.
pub async fn publish_all(sinks: &[Box<dyn SummarySink>], summary: &LoadTestSummary) -> PublishReport {
    let mut report = PublishReport::default();
    for sink in sinks {
        match sink.publish(summary).await {
            Ok(()) => {
                info!(sink = sink.name(), "summary published");
                report.published = report.published.saturating_add(1);
            }
            Err(err) => {
                warn!(sink = sink.name(), "Failed to publish summary: {}", err);
                report.failed = report.failed.saturating_add(1);
            }
        }
    }
    report
}
