use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{LoadArgs, PositiveU64, PositiveUsize, RatePerSecond};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies config file values to args not set on the command line or env.
///
/// # Errors
///
/// Returns an error when a config value is zero, negative, or malformed.
pub fn apply_config(
    args: &mut LoadArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_explicit(matches, "virtual_users")
        && let Some(value) = config.virtual_users
    {
        args.virtual_users = ensure_positive_usize(value, "virtual_users")?;
    }

    if !is_explicit(matches, "rate")
        && let Some(value) = config.rate
    {
        args.rate = RatePerSecond::try_from(value).map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "rate".to_owned(),
                source: err,
            })
        })?;
    }

    if !is_explicit(matches, "duration")
        && let Some(value) = config.duration
    {
        args.duration = ensure_positive_u64(value, "duration")?;
    }

    if !is_explicit(matches, "test_id")
        && let Some(test_id) = config.test_id.clone()
    {
        args.test_id = Some(test_id);
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(value) = config.request_timeout.as_ref()
    {
        args.request_timeout = ensure_duration(value, "request_timeout")?;
    }

    if !is_explicit(matches, "connect_timeout")
        && let Some(value) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = ensure_duration(value, "connect_timeout")?;
    }

    if !is_explicit(matches, "no_ua")
        && let Some(value) = config.no_ua
    {
        args.no_ua = value;
    }

    if !is_explicit(matches, "output_format")
        && let Some(value) = config.output_format
    {
        args.output_format = value;
    }

    if let Some(sinks) = config.sinks.as_ref() {
        if !is_explicit(matches, "summary_file")
            && let Some(path) = sinks.summary_file.clone()
        {
            args.summary_file = Some(path);
        }
        if !is_explicit(matches, "webhook_url")
            && let Some(url) = sinks.webhook_url.clone()
        {
            args.webhook_url = Some(url);
        }
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_duration(value: &DurationValue, field: &str) -> AppResult<std::time::Duration> {
    value.to_duration().map_err(|err| {
        AppError::config(ConfigError::InvalidField {
            field: field.to_owned(),
            source: err,
        })
    })
}
