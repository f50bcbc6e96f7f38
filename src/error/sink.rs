use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to serialize summary: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write summary file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to build webhook client: {source}")]
    WebhookClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Webhook request to '{url}' failed: {source}")]
    WebhookRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Webhook '{url}' responded with status {status}.")]
    WebhookStatus { url: String, status: u16 },
}
