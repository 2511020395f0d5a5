use std::time::Duration;

use crate::view_model::{DashboardView, DigitGrouping, PopupView, StatusLine};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    view: DashboardView,
    grouping: DigitGrouping,
    fetch_in_flight: bool,
    dirty: bool,
}

impl DashboardState {
    pub fn new(grouping: DigitGrouping) -> Self {
        Self {
            grouping,
            ..Self::default()
        }
    }

    pub fn view(&self) -> DashboardView {
        self.view.clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn grouping(&self) -> &DigitGrouping {
        &self.grouping
    }

    pub(crate) fn begin_fetch(&mut self) -> bool {
        if self.fetch_in_flight {
            return false;
        }
        self.fetch_in_flight = true;
        true
    }

    pub(crate) fn replace_view(&mut self, view: DashboardView) {
        self.fetch_in_flight = false;
        self.view = view;
        self.dirty = true;
    }
}

pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormSnapshot {
    pub(crate) title: String,
    pub(crate) description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupState {
    title: String,
    description: String,
    status: Option<StatusLine>,
    pending: Option<FormSnapshot>,
    close_delay: Duration,
    dirty: bool,
}

impl Default for PopupState {
    fn default() -> Self {
        Self::new(DEFAULT_CLOSE_DELAY)
    }
}

impl PopupState {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: None,
            pending: None,
            close_delay,
            dirty: false,
        }
    }

    pub fn view(&self) -> PopupView {
        PopupView {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            submitting: self.pending.is_some(),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn close_delay(&self) -> Duration {
        self.close_delay
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
        self.dirty = true;
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
        self.dirty = true;
    }

    /// Snapshots the form for a new submission. Returns false while one is pending.
    pub(crate) fn begin_submit(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(FormSnapshot {
            title: self.title.clone(),
            description: self.description.clone(),
        });
        self.dirty = true;
        true
    }

    pub(crate) fn pending(&self) -> Option<&FormSnapshot> {
        self.pending.as_ref()
    }

    pub(crate) fn finish_success(&mut self, status: StatusLine) {
        self.pending = None;
        self.title.clear();
        self.description.clear();
        self.status = Some(status);
        self.dirty = true;
    }

    pub(crate) fn finish_failure(&mut self, status: StatusLine) {
        self.pending = None;
        self.status = Some(status);
        self.dirty = true;
    }
}
