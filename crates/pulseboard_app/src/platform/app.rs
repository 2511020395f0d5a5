use std::sync::Arc;

use anyhow::Context;
use log::LevelFilter;
use pulseboard_engine::{DashboardPoller, ReqwestApi};
use pulseboard_logging::{pulse_info, pulse_warn};
use tokio_util::sync::CancellationToken;

use super::config::{load_settings, log_destination};
use super::render::TerminalSink;

pub fn run_app() -> anyhow::Result<()> {
    let env = |key: &str| std::env::var(key).ok();
    pulseboard_logging::initialize(&log_destination(env), LevelFilter::Info);

    let settings = load_settings(env);
    pulse_info!(
        "Starting dashboard against {} (poll every {:?})",
        settings.api_origin,
        settings.poll_interval
    );

    let api = ReqwestApi::new(&settings).context("building the API client")?;
    let poller = DashboardPoller::new(Arc::new(api), &settings);

    let runtime = tokio::runtime::Runtime::new().context("starting the tokio runtime")?;
    runtime.block_on(async move {
        let shutdown = CancellationToken::new();
        let on_ctrl_c = shutdown.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                pulse_warn!("Ctrl-C handler unavailable: {}", err);
                return;
            }
            on_ctrl_c.cancel();
        });

        poller.run(&TerminalSink, shutdown).await;
    });

    Ok(())
}
