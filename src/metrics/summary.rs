use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::ResultCounts;

/// Elapsed times below this yield a throughput of zero instead of a
/// meaningless division by a near-zero denominator.
pub const MIN_MEASURABLE_DURATION: Duration = Duration::from_millis(1);

const MICROS_PER_HUNDREDTH_SEC: u128 = 10_000;
const HUNDREDTHS_PER_UNIT: u128 = 100;
const MICROS_PER_SEC: u128 = 1_000_000;

/// Fixed-point value with two decimal digits, rounded half up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hundredths(u64);

impl Hundredths {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "reporting conversion of an already-rounded fixed-point value"
    )]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    fn rounded_ratio(numerator: u128, denominator: u128) -> Self {
        let Some(doubled) = denominator.checked_mul(2) else {
            return Self(0);
        };
        let rounded = numerator
            .saturating_mul(2)
            .saturating_add(denominator)
            .checked_div(doubled)
            .unwrap_or(0);
        Self(u64::try_from(rounded).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Hundredths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Hundredths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

/// Run metadata that is fixed before the first request is sent.
#[derive(Debug, Clone, Copy)]
pub struct SummaryContext<'run> {
    pub test_id: &'run str,
    pub target_url: &'run str,
    pub virtual_users: usize,
    pub rate_per_virtual_user: f64,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadTestSummary {
    pub test_id: String,
    pub target_url: String,
    pub started_at: DateTime<Utc>,
    pub virtual_users: usize,
    pub rate_per_virtual_user: f64,
    /// Measured wall-clock time from window start to the last worker joining.
    pub duration_seconds: Hundredths,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub status_failures: u64,
    pub transport_failures: u64,
    pub transactions_per_second: Hundredths,
}

/// Builds the immutable summary of a completed run.
///
/// Throughput is computed from the exact elapsed microseconds and only then
/// rounded to two decimals.
#[must_use]
pub fn build_summary(
    counts: ResultCounts,
    elapsed: Duration,
    context: &SummaryContext<'_>,
) -> LoadTestSummary {
    let elapsed_micros = elapsed.as_micros();
    let duration_seconds = Hundredths::rounded_ratio(elapsed_micros, MICROS_PER_HUNDREDTH_SEC);

    let transactions_per_second = if elapsed < MIN_MEASURABLE_DURATION {
        Hundredths::default()
    } else {
        let scaled_successes = u128::from(counts.successful)
            .saturating_mul(HUNDREDTHS_PER_UNIT)
            .saturating_mul(MICROS_PER_SEC);
        Hundredths::rounded_ratio(scaled_successes, elapsed_micros)
    };

    LoadTestSummary {
        test_id: context.test_id.to_owned(),
        target_url: context.target_url.to_owned(),
        started_at: context.started_at,
        virtual_users: context.virtual_users,
        rate_per_virtual_user: context.rate_per_virtual_user,
        duration_seconds,
        total_requests: counts.total(),
        successful_requests: counts.successful,
        failed_requests: counts.failed(),
        status_failures: counts.status_failures,
        transport_failures: counts.transport_failures,
        transactions_per_second,
    }
}
