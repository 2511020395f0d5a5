use pulseboard_core::{ContextMenuItem, Notification, TabInfo};

use crate::HostError;

/// Capabilities the browser environment provides to the extension surfaces.
#[async_trait::async_trait]
pub trait BrowserHost: Send + Sync {
    /// URL and title of the active tab in the current window.
    async fn active_tab(&self) -> Result<TabInfo, HostError>;

    /// Shows a system notification.
    fn notify(&self, notification: &Notification);

    /// Registers a context-menu item. Ids are unique per host.
    fn register_context_menu(&self, item: &ContextMenuItem);

    /// Closes the window the calling surface lives in.
    fn close_window(&self);

    /// Blocking in-page alert.
    fn alert(&self, message: &str);
}
