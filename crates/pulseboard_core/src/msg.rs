use crate::{DashboardData, TabInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardMsg {
    /// Poll timer fired (also sent once at startup).
    Tick,
    /// Dashboard data arrived and parsed.
    Loaded(DashboardData),
    /// Transport failure, non-2xx status or malformed body.
    LoadFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupMsg {
    TitleChanged(String),
    DescriptionChanged(String),
    /// User submitted the form; native submission is already suppressed.
    SubmitClicked,
    ActiveTabResolved(TabInfo),
    ActiveTabUnavailable(String),
    /// Server confirmed the signal with a 2xx JSON response.
    SubmitSucceeded,
    SubmitFailed(String),
}
