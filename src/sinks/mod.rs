//! Best-effort publishing of the final summary to external destinations.
mod config;
mod writers;


pub use config::SinksConfig;
pub use writers::{
    JsonFileSink, PublishReport, SummarySink, WebhookSink, build_sinks, publish_all,
};
