use std::time::Duration;

use reqwest::Url;

use crate::args::LoadArgs;
use crate::error::ConfigError;
use crate::http::RateLimiter;

/// Parameters of one load test, as supplied by a configuration source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTestConfig {
    pub target_url: String,
    pub virtual_users: usize,
    /// Requests per second for each virtual user.
    pub rate_per_virtual_user: f64,
    pub duration_seconds: u64,
    pub test_id: Option<String>,
}

/// A config that passed validation; only these can start workers.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub url: Url,
    pub virtual_users: usize,
    pub limiter: RateLimiter,
    pub duration: Duration,
}

impl LoadTestConfig {
    #[must_use]
    pub fn new(
        target_url: impl Into<String>,
        virtual_users: usize,
        rate_per_virtual_user: f64,
        duration_seconds: u64,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            virtual_users,
            rate_per_virtual_user,
            duration_seconds,
            test_id: None,
        }
    }

    #[must_use]
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Checks every field before any worker may start.
    ///
    /// # Errors
    ///
    /// Returns the first violation: empty or malformed URL, a non-HTTP
    /// scheme, zero virtual users, a non-positive rate, or a zero duration.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let url = parse_target_url(&self.target_url)?;
        if self.virtual_users == 0 {
            return Err(ConfigError::VirtualUsersZero);
        }
        let limiter = RateLimiter::new(self.rate_per_virtual_user)?;
        if self.duration_seconds == 0 {
            return Err(ConfigError::DurationZero);
        }
        Ok(ValidatedConfig {
            url,
            virtual_users: self.virtual_users,
            limiter,
            duration: Duration::from_secs(self.duration_seconds),
        })
    }

    #[must_use]
    pub fn test_id(&self) -> &str {
        self.test_id.as_deref().unwrap_or_default()
    }
}

impl TryFrom<&LoadArgs> for LoadTestConfig {
    type Error = ConfigError;

    fn try_from(args: &LoadArgs) -> Result<Self, Self::Error> {
        let url = args.url.clone().ok_or(ConfigError::MissingUrl)?;
        Ok(Self {
            target_url: url,
            virtual_users: args.virtual_users.get(),
            rate_per_virtual_user: args.rate.get(),
            duration_seconds: args.duration.get(),
            test_id: args.test_id.clone(),
        })
    }
}

fn parse_target_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyUrl);
    }
    let url = Url::parse(trimmed).map_err(|err| ConfigError::InvalidUrl {
        url: trimmed.to_owned(),
        source: err,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            scheme: url.scheme().to_owned(),
        });
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::UrlMissingHost);
    }
    Ok(url)
}
