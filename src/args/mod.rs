//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::LoadArgs;
pub use types::{OutputFormat, PositiveU64, PositiveUsize, RatePerSecond};

pub(crate) use defaults::{
    DEFAULT_CONFIG_FILES, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT,
};
pub(crate) use parsers::parse_duration_arg;
