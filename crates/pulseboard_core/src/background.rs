//! Context-menu wiring and outcome notifications for the background handler.
use crate::{Signal, TabInfo};

pub const MENU_ITEM_ID: &str = "saveToPulseBoard";
pub const MENU_ITEM_TITLE: &str = "Save to PulseBoard";
pub const CONTEXT_MENU_SOURCE: &str = "Chrome Extension Context Menu";
pub const CONTEXT_MENU_TITLE_PREFIX: &str = "Context Menu Save: ";
pub const CONTEXT_MENU_DESCRIPTION: &str = "Saved from context menu.";

pub const NOTIFICATION_TITLE: &str = "PulseBoard";
pub const NOTIFICATION_ICON: &str = "icons/icon48.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuContext {
    Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuItem {
    pub id: String,
    pub title: String,
    pub contexts: Vec<MenuContext>,
}

impl ContextMenuItem {
    pub fn save_page() -> Self {
        Self {
            id: MENU_ITEM_ID.to_string(),
            title: MENU_ITEM_TITLE.to_string(),
            contexts: vec![MenuContext::Page],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuClick {
    pub menu_item_id: String,
    pub tab: TabInfo,
}

/// Signal for a click on our menu item; clicks on other items yield `None`.
pub fn signal_for_click(click: &ContextMenuClick) -> Option<Signal> {
    if click.menu_item_id != MENU_ITEM_ID {
        return None;
    }
    Some(Signal {
        title: format!("{CONTEXT_MENU_TITLE_PREFIX}{}", click.tab.title),
        description: CONTEXT_MENU_DESCRIPTION.to_string(),
        source: CONTEXT_MENU_SOURCE.to_string(),
        url: click.tab.url.clone(),
        page_title: click.tab.title.clone(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Basic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub icon_url: String,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn basic(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Basic,
            icon_url: NOTIFICATION_ICON.to_string(),
            title: NOTIFICATION_TITLE.to_string(),
            message: message.into(),
        }
    }
}

/// Message pair used to report the outcome of one signal submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub success: String,
    pub failure_prefix: String,
}

impl Announcement {
    pub fn context_menu() -> Self {
        Self {
            success: "Page saved to PulseBoard successfully!".to_string(),
            failure_prefix: "Failed to save page to PulseBoard: ".to_string(),
        }
    }

    pub fn hotkey_relay() -> Self {
        Self {
            success: "Page captured to PulseBoard via hotkey!".to_string(),
            failure_prefix: "Failed to capture page to PulseBoard: ".to_string(),
        }
    }

    pub fn outcome<E: std::fmt::Display>(&self, result: Result<(), E>) -> Notification {
        match result {
            Ok(()) => Notification::basic(self.success.clone()),
            Err(err) => Notification::basic(format!("{}{err}", self.failure_prefix)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(id: &str) -> ContextMenuClick {
        ContextMenuClick {
            menu_item_id: id.to_string(),
            tab: TabInfo {
                url: "https://x.test/page".into(),
                title: "X".into(),
            },
        }
    }

    #[test]
    fn click_on_save_item_builds_prefixed_signal() {
        let signal = signal_for_click(&click(MENU_ITEM_ID)).expect("signal");
        assert_eq!(signal.title, "Context Menu Save: X");
        assert_eq!(signal.description, "Saved from context menu.");
        assert_eq!(signal.source, "Chrome Extension Context Menu");
        assert_eq!(signal.url, "https://x.test/page");
        assert_eq!(signal.page_title, "X");
    }

    #[test]
    fn click_on_foreign_item_is_ignored() {
        assert!(signal_for_click(&click("somethingElse")).is_none());
    }

    #[test]
    fn failure_notification_carries_error_text() {
        let note = Announcement::context_menu().outcome(Err("http status 500"));
        assert_eq!(note.kind, NotificationKind::Basic);
        assert_eq!(note.title, "PulseBoard");
        assert_eq!(note.message, "Failed to save page to PulseBoard: http status 500");
    }
}
