use std::sync::Arc;

use tracing::info;

use crate::args::LoadArgs;
use crate::error::{AppError, AppResult};
use crate::http::{ClientSettings, ReqwestTransportFactory};
use crate::shutdown::CancelToken;
use crate::shutdown_handlers::setup_signal_shutdown_handler;
use crate::sinks::{SinksConfig, build_sinks, publish_all};

use super::config::LoadTestConfig;
use super::runner::LoadTestOrchestrator;
use super::summary::print_summary;

/// Runs one load test from fully resolved CLI arguments.
pub(crate) async fn run_local(args: &LoadArgs) -> AppResult<()> {
    let config = LoadTestConfig::try_from(args).map_err(AppError::config)?;
    let sinks = build_sinks(&SinksConfig::from(args))?;
    let transports = Arc::new(ReqwestTransportFactory::new(ClientSettings::from(args)));

    let cancel = CancelToken::new();
    let signal_handle = setup_signal_shutdown_handler(&cancel);
    let orchestrator = LoadTestOrchestrator::new(transports).with_cancel_token(cancel.clone());

    let result = orchestrator.run(&config).await;
    cancel.cancel();
    drop(signal_handle.await);
    let summary = result?;

    print_summary(&summary, args.output_format)?;

    if !sinks.is_empty() {
        let report = publish_all(&sinks, &summary).await;
        info!(
            published = report.published,
            failed = report.failed,
            "summary sinks finished"
        );
    }
    Ok(())
}
