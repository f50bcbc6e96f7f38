use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::LoadTestSummary;

pub(crate) fn summary_lines(summary: &LoadTestSummary) -> Vec<String> {
    let mut lines = Vec::new();
    if !summary.test_id.is_empty() {
        lines.push(format!("Test ID: {}", summary.test_id));
    }
    lines.push(format!("Target: {}", summary.target_url));
    lines.push(format!(
        "Started: {}",
        summary
            .started_at
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    ));
    lines.push(format!(
        "Virtual Users: {} @ {} req/s each",
        summary.virtual_users, summary.rate_per_virtual_user
    ));
    lines.push(format!("Duration: {}s", summary.duration_seconds));
    lines.push(format!("Total Requests: {}", summary.total_requests));
    lines.push(format!("Successful: {}", summary.successful_requests));
    lines.push(format!("Failed: {}", summary.failed_requests));
    lines.push(format!("Non-2xx Status: {}", summary.status_failures));
    lines.push(format!("Transport Errors: {}", summary.transport_failures));
    lines.push(format!("TPS: {}", summary.transactions_per_second));
    lines
}

pub(crate) fn render_summary(summary: &LoadTestSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(summary_lines(summary).join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

pub(crate) fn print_summary(summary: &LoadTestSummary, format: OutputFormat) -> AppResult<()> {
    let rendered = render_summary(summary, format)?;
    println!("{}", rendered);
    Ok(())
}
