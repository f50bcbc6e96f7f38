use super::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing URL (set --url or provide in config).")]
    MissingUrl,
    #[error("Target URL must not be empty.")]
    EmptyUrl,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("URL is missing host.")]
    UrlMissingHost,
    #[error("Virtual users must be >= 1.")]
    VirtualUsersZero,
    #[error("Rate per virtual user must be a finite number > 0, got {value}.")]
    RateNotPositive { value: f64 },
    #[error("Rate per virtual user {value} is too low to schedule.")]
    RateTooLow { value: f64 },
    #[error("Rate per virtual user {value} is too high to pace (interval rounds to zero).")]
    RateTooHigh { value: f64 },
    #[error("Duration must be >= 1 second.")]
    DurationZero,
    #[error("Duration of {seconds}s cannot be scheduled.")]
    DurationTooLong { seconds: u64 },
    #[error("Config '{field}' must be >= 1: {source}")]
    FieldMustBePositive {
        field: String,
        #[source]
        source: ValidationError,
    },
    #[error("Invalid config '{field}': {source}")]
    InvalidField {
        field: String,
        #[source]
        source: ValidationError,
    },
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
}
