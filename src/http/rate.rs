use std::time::Duration;

use tokio::time::Instant;

use crate::error::ConfigError;

/// Per-worker pacer enforcing at most `rate` requests per second.
///
/// A request that overruns its interval is followed immediately by the next
/// one, but missed slots are never made up with a burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiter {
    interval: Duration,
}

impl RateLimiter {
    /// Builds a pacer with a minimum spacing of `1 / rate` seconds.
    ///
    /// # Errors
    ///
    /// Returns an error when `rate` is not a finite number above zero, or its
    /// interval is unrepresentable or rounds to zero nanoseconds.
    pub fn new(rate_per_second: f64) -> Result<Self, ConfigError> {
        if !rate_per_second.is_finite() || rate_per_second <= 0.0 {
            return Err(ConfigError::RateNotPositive {
                value: rate_per_second,
            });
        }
        let interval = Duration::try_from_secs_f64(rate_per_second.recip()).map_err(|_err| {
            ConfigError::RateTooLow {
                value: rate_per_second,
            }
        })?;
        if interval.is_zero() {
            return Err(ConfigError::RateTooHigh {
                value: rate_per_second,
            });
        }
        Ok(Self { interval })
    }

    #[cfg(test)]
    pub(crate) const fn from_interval(interval: Duration) -> Self {
        Self { interval }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Earliest start of the next request when the current one starts at
    /// `started`, never later than `window_end`.
    #[must_use]
    pub fn next_allowed(&self, started: Instant, window_end: Instant) -> Instant {
        started
            .checked_add(self.interval)
            .map_or(window_end, |next| next.min(window_end))
    }

    /// Time still to wait at `now`; `None` once the slot has already passed.
    #[must_use]
    pub fn remaining(next_allowed: Instant, now: Instant) -> Option<Duration> {
        next_allowed
            .checked_duration_since(now)
            .filter(|delay| !delay.is_zero())
    }
}
