use super::*;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

const WORKERS: usize = 8;
const INCREMENTS_PER_WORKER: u64 = 1_000;

fn context() -> Result<SummaryContext<'static>, String> {
    let started_at = Utc
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .ok_or_else(|| "invalid timestamp".to_owned())?;
    Ok(SummaryContext {
        test_id: "run-1",
        target_url: "http://localhost/health",
        virtual_users: 3,
        rate_per_virtual_user: 2.0,
        started_at,
    })
}

fn counts(successful: u64, status_failures: u64, transport_failures: u64) -> ResultCounts {
    ResultCounts {
        successful,
        status_failures,
        transport_failures,
    }
}

#[test]
fn aggregator_counts_concurrent_updates_exactly() -> Result<(), String> {
    let aggregator = Arc::new(ResultAggregator::new());

    std::thread::scope(|scope| {
        for worker in 0..WORKERS {
            let aggregator = Arc::clone(&aggregator);
            scope.spawn(move || {
                for _ in 0..INCREMENTS_PER_WORKER {
                    if worker % 2 == 0 {
                        aggregator.record_success();
                    } else if worker % 3 == 0 {
                        aggregator.record_failure(FailureKind::Transport);
                    } else {
                        aggregator.record_failure(FailureKind::Status);
                    }
                }
            });
        }
    });

    let snapshot = aggregator.counts();
    // workers 0,2,4,6 succeed; 3 fails on transport; 1,5,7 fail on status
    if snapshot.successful != 4 * INCREMENTS_PER_WORKER {
        return Err(format!("Unexpected successes: {}", snapshot.successful));
    }
    if snapshot.transport_failures != INCREMENTS_PER_WORKER {
        return Err(format!(
            "Unexpected transport failures: {}",
            snapshot.transport_failures
        ));
    }
    if snapshot.status_failures != 3 * INCREMENTS_PER_WORKER {
        return Err(format!(
            "Unexpected status failures: {}",
            snapshot.status_failures
        ));
    }
    if snapshot.total() != 8 * INCREMENTS_PER_WORKER {
        return Err(format!("Lost or duplicated updates: {}", snapshot.total()));
    }
    Ok(())
}

#[test]
fn new_aggregator_is_empty() -> Result<(), String> {
    let snapshot = ResultAggregator::default().counts();
    if snapshot != ResultCounts::default() || snapshot.total() != 0 {
        return Err(format!("Expected empty counts, got {:?}", snapshot));
    }
    Ok(())
}

#[test]
fn summary_computes_tps_from_measured_duration() -> Result<(), String> {
    let summary = build_summary(counts(12, 0, 0), Duration::from_secs(2), &context()?);

    if summary.transactions_per_second != Hundredths::from_raw(600) {
        return Err(format!("Unexpected tps: {}", summary.transactions_per_second));
    }
    if summary.duration_seconds != Hundredths::from_raw(200) {
        return Err(format!("Unexpected duration: {}", summary.duration_seconds));
    }
    if summary.successful_requests != 12 || summary.failed_requests != 0 {
        return Err("Unexpected counts".to_owned());
    }
    if summary.test_id != "run-1" || summary.target_url != "http://localhost/health" {
        return Err("Unexpected run metadata".to_owned());
    }
    Ok(())
}

#[test]
fn summary_rounds_to_two_decimals_from_full_precision() -> Result<(), String> {
    let cases = [
        (10, Duration::from_secs(3), 333, 300),
        (1, Duration::from_millis(1_500), 67, 150),
        (7, Duration::from_micros(2_345_678), 298, 235),
    ];
    for (successful, elapsed, tps_raw, duration_raw) in cases {
        let summary = build_summary(counts(successful, 0, 0), elapsed, &context()?);
        if summary.transactions_per_second.raw() != tps_raw {
            return Err(format!(
                "{} successes over {:?}: expected tps raw {}, got {}",
                successful,
                elapsed,
                tps_raw,
                summary.transactions_per_second.raw()
            ));
        }
        if summary.duration_seconds.raw() != duration_raw {
            return Err(format!(
                "{:?}: expected duration raw {}, got {}",
                elapsed,
                duration_raw,
                summary.duration_seconds.raw()
            ));
        }
    }
    Ok(())
}

#[test]
fn summary_zero_duration_reports_zero_tps() -> Result<(), String> {
    for elapsed in [Duration::ZERO, Duration::from_micros(999)] {
        let summary = build_summary(counts(5, 1, 0), elapsed, &context()?);
        if summary.transactions_per_second != Hundredths::default() {
            return Err(format!(
                "Expected zero tps for {:?}, got {}",
                elapsed, summary.transactions_per_second
            ));
        }
    }
    Ok(())
}

#[test]
fn summary_failure_breakdown_adds_up() -> Result<(), String> {
    let summary = build_summary(counts(3, 4, 5), Duration::from_secs(1), &context()?);
    if summary.failed_requests != 9 {
        return Err(format!("Unexpected failed: {}", summary.failed_requests));
    }
    if summary.total_requests != 12 {
        return Err(format!("Unexpected total: {}", summary.total_requests));
    }
    if summary.status_failures != 4 || summary.transport_failures != 5 {
        return Err("Unexpected failure breakdown".to_owned());
    }
    if summary.transactions_per_second != Hundredths::from_raw(300) {
        return Err(format!("Failures must not count toward tps: {}", summary.transactions_per_second));
    }
    Ok(())
}

#[test]
fn hundredths_display_and_json() -> Result<(), String> {
    let value = Hundredths::from_raw(1_205);
    if value.to_string() != "12.05" {
        return Err(format!("Unexpected display: {}", value));
    }
    let json = serde_json::to_string(&value).map_err(|err| err.to_string())?;
    if json != "12.05" {
        return Err(format!("Unexpected json: {}", json));
    }
    Ok(())
}

#[test]
fn summary_serializes_expected_fields() -> Result<(), String> {
    let summary = build_summary(counts(12, 1, 1), Duration::from_secs(2), &context()?);
    let value = serde_json::to_value(&summary).map_err(|err| err.to_string())?;
    for key in [
        "test_id",
        "target_url",
        "started_at",
        "duration_seconds",
        "successful_requests",
        "failed_requests",
        "transactions_per_second",
    ] {
        if value.get(key).is_none() {
            return Err(format!("Missing key '{}' in {}", key, value));
        }
    }
    if value.get("started_at").and_then(|v| v.as_str()) != Some("2026-01-02T03:04:05Z") {
        return Err(format!("Unexpected started_at: {}", value));
    }
    Ok(())
}
