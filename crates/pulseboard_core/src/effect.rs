use std::time::Duration;

use crate::Signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEffect {
    FetchDashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEffect {
    QueryActiveTab,
    PostSignal(Signal),
    CloseWindow { after: Duration },
}
