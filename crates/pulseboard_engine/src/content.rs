use std::sync::Arc;

use chrono::Utc;
use pulseboard_core::{Hotkey, KeyEvent, PageInfo, HOTKEY_ACK_ALERT};
use pulseboard_logging::{pulse_info, pulse_warn};

use crate::relay::{AckHandle, RelayAck, RelaySender};
use crate::BrowserHost;

/// What the keydown listener did with an event.
#[derive(Debug)]
pub enum KeyDisposition {
    /// Not our shortcut; default handling proceeds.
    Ignored,
    /// Shortcut matched, the capture is queued on the relay and default
    /// handling is suppressed.
    Captured { ack: AckHandle },
}

impl KeyDisposition {
    pub fn default_prevented(&self) -> bool {
        matches!(self, KeyDisposition::Captured { .. })
    }
}

/// In-page surface. It never talks to the network; captures go to the
/// background handler over the relay.
pub struct ContentScript {
    relay: RelaySender,
    host: Arc<dyn BrowserHost>,
    hotkey: Hotkey,
}

impl ContentScript {
    pub fn new(relay: RelaySender, host: Arc<dyn BrowserHost>) -> Self {
        Self::with_hotkey(relay, host, Hotkey::default())
    }

    pub fn with_hotkey(relay: RelaySender, host: Arc<dyn BrowserHost>, hotkey: Hotkey) -> Self {
        Self { relay, host, hotkey }
    }

    pub fn on_key_down(&self, event: &KeyEvent, page: &PageInfo) -> KeyDisposition {
        let Some(capture) = self.hotkey.capture(event, page, Utc::now()) else {
            return KeyDisposition::Ignored;
        };
        match self.relay.send(capture) {
            Some(ack) => KeyDisposition::Captured { ack },
            None => {
                // Lost captures leave the browser's default handling alone.
                pulse_warn!("Relay unavailable; hotkey capture of {} dropped", page.url);
                KeyDisposition::Ignored
            }
        }
    }

    /// Waits for the background's confirmation and shows the alert.
    pub async fn acknowledge(&self, ack: AckHandle) -> bool {
        match ack.wait().await {
            Some(RelayAck::SignalSent) => {
                pulse_info!("Signal successfully sent to backend via hotkey.");
                self.host.alert(HOTKEY_ACK_ALERT);
                true
            }
            None => false,
        }
    }
}
