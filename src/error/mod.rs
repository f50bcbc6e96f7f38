mod app;
mod config;
mod http;
mod sink;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::{HttpError, TransportError, TransportErrorKind};
pub use sink::SinkError;
pub use validation::ValidationError;
