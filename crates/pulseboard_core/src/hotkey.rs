use chrono::{DateTime, Utc};

use crate::{PageCapture, PageInfo};

pub const HOTKEY_ACK_ALERT: &str = "PulseBoard Signal Captured via Hotkey!";

/// Keyboard event as seen by a document-level `keydown` listener.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    pub key: String,
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Capture shortcut. Only Alt, Shift and the key are inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub key: String,
    pub alt: bool,
    pub shift: bool,
}

impl Default for Hotkey {
    fn default() -> Self {
        Self {
            key: "S".to_string(),
            alt: true,
            shift: true,
        }
    }
}

impl Hotkey {
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.alt == self.alt && event.shift == self.shift && event.key == self.key
    }

    /// Page capture for a matching key event, `None` otherwise.
    pub fn capture(&self, event: &KeyEvent, page: &PageInfo, now: DateTime<Utc>) -> Option<PageCapture> {
        self.matches(event).then(|| PageCapture::from_hotkey(page, now))
    }
}
