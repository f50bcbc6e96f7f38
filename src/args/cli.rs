use clap::Parser;
use std::time::Duration;

use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_u64, parse_positive_usize, parse_rate,
};
use super::types::{OutputFormat, PositiveU64, PositiveUsize, RatePerSecond};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Rate-limited async HTTP load generator - independent virtual users, per-user request pacing, and throughput summaries.",
    next_help_heading = "Advanced Options"
)]
pub struct LoadArgs {
    /// Target URL (GET requests only)
    #[arg(long, short, env = "VULOAD_URL", help_heading = "Common Options")]
    pub url: Option<String>,

    /// Number of concurrent virtual users
    #[arg(
        long = "virtual-users",
        short = 'c',
        env = "VULOAD_VIRTUAL_USERS",
        default_value = "1",
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub virtual_users: PositiveUsize,

    /// Requests per second issued by each virtual user (fractional allowed)
    #[arg(
        long = "rate",
        short = 'r',
        env = "VULOAD_RATE",
        default_value = "1",
        value_parser = parse_rate,
        help_heading = "Common Options"
    )]
    pub rate: RatePerSecond,

    /// Duration of test (seconds)
    #[arg(
        long = "duration",
        short = 't',
        env = "VULOAD_DURATION",
        default_value = "10",
        value_parser = parse_positive_u64,
        help_heading = "Common Options"
    )]
    pub duration: PositiveU64,

    /// Opaque identifier echoed into the summary
    #[arg(long = "test-id", env = "VULOAD_TEST_ID")]
    pub test_id: Option<String>,

    /// Per-request timeout (e.g. 500ms, 10s)
    #[arg(
        long = "request-timeout",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// TCP connect timeout (e.g. 500ms, 5s)
    #[arg(
        long = "connect-timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Do not send the default User-Agent header
    #[arg(long = "no-ua")]
    pub no_ua: bool,

    /// Path to a TOML or JSON config file
    #[arg(long, short = 'C', env = "VULOAD_CONFIG")]
    pub config: Option<String>,

    /// Summary format written to stdout
    #[arg(
        long = "output-format",
        default_value = "text",
        value_enum,
        help_heading = "Common Options"
    )]
    pub output_format: OutputFormat,

    /// Also write the summary as JSON to this path
    #[arg(long = "summary-file", env = "VULOAD_SUMMARY_FILE")]
    pub summary_file: Option<String>,

    /// POST the summary as JSON to this URL (best effort)
    #[arg(long = "webhook-url", env = "VULOAD_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Enable debug logging (per-request outcomes)
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
