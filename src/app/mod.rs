//! Load test orchestration and the CLI run driver.
mod config;
mod local_run;
mod phase;
mod runner;
pub(crate) mod summary;
mod window;


pub use config::{LoadTestConfig, ValidatedConfig};
pub use phase::RunPhase;
pub use runner::LoadTestOrchestrator;
pub use window::TestWindow;

pub(crate) use local_run::run_local;
