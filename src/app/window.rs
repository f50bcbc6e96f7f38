use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

/// Fixed interval during which workers may start new requests.
///
/// Computed once per run and copied into every worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestWindow {
    start: Instant,
    end: Instant,
    started_at: DateTime<Utc>,
}

impl TestWindow {
    /// Opens a window starting now. `None` if `duration` cannot be added to
    /// the current instant.
    #[must_use]
    pub fn open(duration: Duration) -> Option<Self> {
        let start = Instant::now();
        let end = start.checked_add(duration)?;
        Some(Self {
            start,
            end,
            started_at: Utc::now(),
        })
    }

    #[must_use]
    pub const fn start(&self) -> Instant {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Instant {
        self.end
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_closed(&self, now: Instant) -> bool {
        now >= self.end
    }

    /// Wall-clock time since the window opened.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
