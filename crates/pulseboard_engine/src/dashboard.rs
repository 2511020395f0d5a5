use std::sync::Arc;
use std::time::Duration;

use pulseboard_core::{
    update_dashboard, DashboardEffect, DashboardMsg, DashboardState, DashboardView,
};
use pulseboard_logging::{pulse_debug, pulse_info, pulse_warn};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::{ClientSettings, PulseApi};

/// Receives every freshly rendered dashboard view.
pub trait ViewSink: Send + Sync {
    fn render(&self, view: &DashboardView);
}

pub struct DashboardPoller {
    api: Arc<dyn PulseApi>,
    state: DashboardState,
    interval: Duration,
}

impl DashboardPoller {
    pub fn new(api: Arc<dyn PulseApi>, settings: &ClientSettings) -> Self {
        Self {
            api,
            state: DashboardState::new(settings.digit_grouping),
            interval: settings.poll_interval,
        }
    }

    pub fn view(&self) -> DashboardView {
        self.state.view()
    }

    /// One fetch-then-rerender unit. Returns the new view if it changed.
    pub async fn poll_once(&mut self) -> Option<DashboardView> {
        let mut pending = self.dispatch(DashboardMsg::Tick);
        while let Some(effect) = pending.pop() {
            match effect {
                DashboardEffect::FetchDashboard => {
                    let msg = match self.api.dashboard_data().await {
                        Ok(data) => {
                            pulse_debug!("Dashboard data received");
                            DashboardMsg::Loaded(data)
                        }
                        Err(err) => {
                            pulse_warn!(
                                "Error fetching dashboard data ({}): {}; showing sample data",
                                err.kind,
                                err
                            );
                            DashboardMsg::LoadFailed {
                                reason: err.to_string(),
                            }
                        }
                    };
                    pending.extend(self.dispatch(msg));
                }
            }
        }

        if self.state.consume_dirty() {
            Some(self.state.view())
        } else {
            None
        }
    }

    /// Polls immediately and then once per interval until `shutdown` fires,
    /// including while a fetch is waiting for its response.
    pub async fn run(mut self, sink: &dyn ViewSink, shutdown: CancellationToken) {
        pulse_info!("Dashboard polling every {:?}", self.interval);
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    // An outstanding fetch is abandoned on shutdown.
                    tokio::select! {
                        _ = shutdown.cancelled() => break,
                        view = self.poll_once() => {
                            if let Some(view) = view {
                                sink.render(&view);
                            }
                        }
                    }
                }
            }
        }
        pulse_info!("Dashboard polling stopped");
    }

    fn dispatch(&mut self, msg: DashboardMsg) -> Vec<DashboardEffect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update_dashboard(state, msg);
        self.state = state;
        effects
    }
}
