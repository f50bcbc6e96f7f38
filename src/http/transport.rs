use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Url};

use crate::args::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT, LoadArgs};
use crate::error::{HttpError, TransportError};

/// Issues single read requests for one virtual user.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one GET request and returns the response status.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no complete response was received.
    async fn send(&self, url: &Url) -> Result<u16, TransportError>;
}

/// Opens one private transport per virtual user.
pub trait TransportFactory: Send + Sync {
    /// Opens the transport owned by `worker_id` for the duration of a run.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be built.
    fn open(&self, worker_id: usize) -> Result<Box<dyn Transport>, HttpError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: Some(DEFAULT_USER_AGENT.to_owned()),
        }
    }
}

impl From<&LoadArgs> for ClientSettings {
    fn from(args: &LoadArgs) -> Self {
        Self {
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            user_agent: if args.no_ua {
                None
            } else {
                Some(DEFAULT_USER_AGENT.to_owned())
            },
        }
    }
}

/// Transport backed by a dedicated `reqwest::Client` and its connection pool.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &Url) -> Result<u16, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        drain_response_body(response).await?;
        Ok(status)
    }
}

/// Builds one `reqwest::Client` per worker so connections are never shared
/// between virtual users.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransportFactory {
    settings: ClientSettings,
}

impl ReqwestTransportFactory {
    #[must_use]
    pub const fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }
}

impl TransportFactory for ReqwestTransportFactory {
    fn open(&self, worker_id: usize) -> Result<Box<dyn Transport>, HttpError> {
        let mut builder = Client::builder()
            .timeout(self.settings.request_timeout)
            .connect_timeout(self.settings.connect_timeout)
            .pool_max_idle_per_host(1);
        if let Some(user_agent) = self.settings.user_agent.as_deref() {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| HttpError::BuildClientFailed {
                worker_id,
                source: err,
            })?;
        Ok(Box::new(ReqwestTransport::new(client)))
    }
}

/// Reads the body to the end so the connection can go back to the pool.
async fn drain_response_body(response: reqwest::Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        chunk?;
    }
    Ok(())
}
