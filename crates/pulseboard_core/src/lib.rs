//! PulseBoard core: data model, view models and pure per-surface update functions.
mod background;
mod effect;
mod hotkey;
mod model;
mod msg;
mod sample;
mod state;
mod update;
mod view_model;

pub use background::{
    signal_for_click, Announcement, ContextMenuClick, ContextMenuItem, MenuContext, Notification,
    NotificationKind, CONTEXT_MENU_SOURCE, MENU_ITEM_ID,
};
pub use effect::{DashboardEffect, PopupEffect};
pub use hotkey::{Hotkey, KeyEvent, HOTKEY_ACK_ALERT};
pub use model::{
    CalendarEvent, DashboardData, DigestEmail, FeedSignal, PageCapture, PageCaptureData, PageInfo,
    Signal, SignalPayload, Stats, TabInfo,
};
pub use msg::{DashboardMsg, PopupMsg};
pub use sample::sample_dashboard_data;
pub use state::{DashboardState, PopupState, DEFAULT_CLOSE_DELAY};
pub use update::{update_dashboard, update_popup, QUICK_ADD_SOURCE};
pub use view_model::{
    DashboardView, DataSource, DigitGrouping, ItemView, PopupView, RegionBody, RegionView,
    StatsView, StatusLine, StatusTone, FALLBACK_NOTICE, NO_EMAILS, NO_EVENTS, NO_SIGNALS,
};
