use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("vuload/", env!("CARGO_PKG_VERSION"), " (load-test)");

/// Default config filenames checked when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["vuload.toml", "vuload.json"];

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
