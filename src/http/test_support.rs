use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tokio::time::Instant;

use crate::error::{HttpError, TransportError, TransportErrorKind};

use super::transport::{ClientSettings, ReqwestTransportFactory, Transport, TransportFactory};

#[derive(Debug, Clone)]
pub(crate) enum MockBehavior {
    Status(u16),
    Error(TransportErrorKind),
    /// First call of every worker takes `delay`, later calls are instant.
    SlowFirst { status: u16, delay: Duration },
    /// Holds the thread for `delay` without ever yielding to the runtime.
    Blocking { status: u16, delay: Duration },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CallRecord {
    pub(crate) worker_id: usize,
    pub(crate) started: Instant,
}

pub(crate) struct MockTransportFactory {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<CallRecord>>>,
    opened: AtomicUsize,
    broken_client: bool,
}

impl MockTransportFactory {
    pub(crate) fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
            opened: AtomicUsize::new(0),
            broken_client: false,
        })
    }

    /// Every `open` fails with a real client build error.
    pub(crate) fn broken() -> Arc<Self> {
        Arc::new(Self {
            behavior: MockBehavior::Status(200),
            calls: Arc::new(Mutex::new(Vec::new())),
            opened: AtomicUsize::new(0),
            broken_client: true,
        })
    }

    pub(crate) fn opened(&self) -> usize {
        self.opened.load(Ordering::Relaxed)
    }

    pub(crate) fn calls(&self) -> Result<Vec<CallRecord>, String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .map_err(|err| format!("calls lock poisoned: {}", err))
    }

    pub(crate) fn calls_for(&self, worker_id: usize) -> Result<Vec<Instant>, String> {
        Ok(self
            .calls()?
            .into_iter()
            .filter(|call| call.worker_id == worker_id)
            .map(|call| call.started)
            .collect())
    }
}

impl TransportFactory for MockTransportFactory {
    fn open(&self, worker_id: usize) -> Result<Box<dyn Transport>, HttpError> {
        if self.broken_client {
            let settings = ClientSettings {
                user_agent: Some("bad\nagent".to_owned()),
                ..ClientSettings::default()
            };
            return ReqwestTransportFactory::new(settings).open(worker_id);
        }
        self.opened.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(MockTransport {
            worker_id,
            behavior: self.behavior.clone(),
            calls: Arc::clone(&self.calls),
            sent: AtomicUsize::new(0),
        }))
    }
}

struct MockTransport {
    worker_id: usize,
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<CallRecord>>>,
    sent: AtomicUsize,
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, _url: &Url) -> Result<u16, TransportError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(CallRecord {
                worker_id: self.worker_id,
                started: Instant::now(),
            });
        }
        let previous = self.sent.fetch_add(1, Ordering::Relaxed);
        match &self.behavior {
            MockBehavior::Status(status) => Ok(*status),
            MockBehavior::Error(kind) => Err(TransportError::new(*kind, "mock failure")),
            MockBehavior::SlowFirst { status, delay } => {
                if previous == 0 {
                    tokio::time::sleep(*delay).await;
                }
                Ok(*status)
            }
            MockBehavior::Blocking { status, delay } => {
                std::thread::sleep(*delay);
                Ok(*status)
            }
        }
    }
}
