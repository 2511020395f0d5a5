use std::sync::Arc;

use pulseboard_core::{signal_for_click, Announcement, ContextMenuClick, ContextMenuItem};
use pulseboard_logging::{pulse_debug, pulse_info};
use tokio_util::sync::CancellationToken;

use crate::relay::{RelayEnvelope, RelayReceiver};
use crate::{submit_and_notify, ApiError, BrowserHost, PulseApi};

/// Privileged background surface: context menu and relayed hotkey captures.
#[derive(Clone)]
pub struct BackgroundHandler {
    api: Arc<dyn PulseApi>,
    host: Arc<dyn BrowserHost>,
}

impl BackgroundHandler {
    pub fn new(api: Arc<dyn PulseApi>, host: Arc<dyn BrowserHost>) -> Self {
        Self { api, host }
    }

    /// Install event. Registration is repeated on every install.
    pub fn on_installed(&self) {
        let item = ContextMenuItem::save_page();
        pulse_debug!("Registering context menu item {}", item.id);
        self.host.register_context_menu(&item);
    }

    /// Returns `None` when the click was for a menu item we do not own.
    pub async fn on_context_menu_clicked(
        &self,
        click: &ContextMenuClick,
    ) -> Option<Result<serde_json::Value, ApiError>> {
        let signal = signal_for_click(click)?;
        Some(
            submit_and_notify(
                self.api.as_ref(),
                self.host.as_ref(),
                signal.into(),
                &Announcement::context_menu(),
            )
            .await,
        )
    }

    /// Submits one relayed capture; the sender is acknowledged only on success.
    pub async fn handle_relay(&self, envelope: RelayEnvelope) -> Result<serde_json::Value, ApiError> {
        let result = submit_and_notify(
            self.api.as_ref(),
            self.host.as_ref(),
            envelope.signal.clone().into(),
            &Announcement::hotkey_relay(),
        )
        .await;
        if result.is_ok() {
            envelope.acknowledge();
        }
        result
    }

    /// Drains the relay channel until it closes or `shutdown` fires.
    pub async fn serve_relay(&self, mut receiver: RelayReceiver, shutdown: CancellationToken) {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                envelope = receiver.recv() => match envelope {
                    Some(envelope) => {
                        tokio::select! {
                            _ = shutdown.cancelled() => break,
                            _ = self.handle_relay(envelope) => {}
                        }
                    }
                    None => break,
                },
            }
        }
        pulse_info!("Relay listener stopped");
    }
}
