//! Outcome counters and the final run summary.
mod aggregator;
mod summary;

#[cfg(test)]
mod tests;

pub use aggregator::{FailureKind, ResultAggregator, ResultCounts};
pub use summary::{
    Hundredths, LoadTestSummary, MIN_MEASURABLE_DURATION, SummaryContext, build_summary,
};
