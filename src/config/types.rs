use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, parse_duration_arg};
use crate::error::ValidationError;
use crate::sinks::SinksConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "vus")]
    pub virtual_users: Option<usize>,
    #[serde(alias = "rate_per_virtual_user")]
    pub rate: Option<f64>,
    pub duration: Option<u64>,
    pub test_id: Option<String>,
    pub request_timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub no_ua: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub sinks: Option<SinksConfig>,
}

/// Either a bare number of seconds or a unit string such as `"750ms"`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    /// Converts the value into a non-zero duration.
    ///
    /// # Errors
    ///
    /// Returns an error when the text form cannot be parsed or the value is zero.
    pub fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
