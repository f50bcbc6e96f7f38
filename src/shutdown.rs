//! Run cancellation shared between the orchestrator, its workers and signal handlers.
use std::sync::Arc;

use tokio::sync::watch;

/// Cloneable, level-triggered cancellation flag.
///
/// Cancelling is sticky: receivers created after `cancel` still observe it.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`CancelToken::cancel`] has been called.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        let result = rx.wait_for(|cancelled| *cancelled).await.map(|_| ());
        if result.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
