use crate::{sample_dashboard_data, CalendarEvent, DashboardData, DigestEmail, FeedSignal, Stats};

pub const DEFAULT_SIGNAL_ICON: &str = "💬";
pub const DEFAULT_EVENT_ICON: &str = "🗓️";
pub const DEFAULT_EMAIL_ICON: &str = "📧";

pub const NO_SIGNALS: &str = "No new signals.";
pub const NO_EVENTS: &str = "No upcoming events.";
pub const NO_EMAILS: &str = "No new emails in digest.";
pub const FALLBACK_NOTICE: &str = "Failed to fetch live data. Displaying sample data.";

/// Thousands grouping for stat counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrouping {
    pub separator: char,
}

impl Default for DigitGrouping {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl DigitGrouping {
    pub fn format(&self, value: u64) -> String {
        let mut out = String::new();
        for (i, ch) in value.to_string().chars().rev().enumerate() {
            if i != 0 && i % 3 == 0 {
                out.push(self.separator);
            }
            out.push(ch);
        }
        out.chars().rev().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Live,
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardView {
    pub source: DataSource,
    pub stats: StatsView,
    pub signal_feed: RegionView,
    pub calendar: RegionView,
    pub email_digest: RegionView,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsView {
    pub total_signals: String,
    pub pending_actions: String,
    pub upcoming_events: String,
    pub emails_processed: String,
}

/// One display region. `notice` is rendered before the body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionView {
    pub notice: Option<String>,
    pub body: RegionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionBody {
    Items(Vec<ItemView>),
    Placeholder(&'static str),
}

impl Default for RegionBody {
    fn default() -> Self {
        RegionBody::Items(Vec::new())
    }
}

impl RegionView {
    pub fn items(&self) -> &[ItemView] {
        match &self.body {
            RegionBody::Items(items) => items,
            RegionBody::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self.body {
            RegionBody::Placeholder(text) => Some(text),
            RegionBody::Items(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub icon: String,
    pub heading: String,
    pub lines: Vec<String>,
    pub meta: Option<String>,
}

impl DashboardView {
    pub fn live(data: &DashboardData, grouping: &DigitGrouping) -> Self {
        Self {
            source: DataSource::Live,
            stats: stats_view(&data.stats, grouping),
            signal_feed: region(data.signal_feed.as_deref(), NO_SIGNALS, feed_item),
            calendar: region(data.calendar_events.as_deref(), NO_EVENTS, event_item),
            email_digest: region(data.email_digest.as_deref(), NO_EMAILS, email_item),
        }
    }

    /// Sample data plus the fetch-failure notice in the signal feed.
    pub fn fallback(grouping: &DigitGrouping) -> Self {
        let mut view = Self::live(&sample_dashboard_data(), grouping);
        view.source = DataSource::Sample;
        view.signal_feed.notice = Some(FALLBACK_NOTICE.to_string());
        view
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupView {
    pub title: String,
    pub description: String,
    pub status: Option<StatusLine>,
    pub submitting: bool,
}

fn stats_view(stats: &Stats, grouping: &DigitGrouping) -> StatsView {
    StatsView {
        total_signals: grouping.format(stats.total_signals),
        pending_actions: grouping.format(stats.pending_actions),
        upcoming_events: grouping.format(stats.upcoming_events),
        emails_processed: grouping.format(stats.emails_processed),
    }
}

fn region<T>(entries: Option<&[T]>, placeholder: &'static str, to_item: fn(&T) -> ItemView) -> RegionView {
    let body = match entries {
        Some(entries) if !entries.is_empty() => RegionBody::Items(entries.iter().map(to_item).collect()),
        _ => RegionBody::Placeholder(placeholder),
    };
    RegionView { notice: None, body }
}

fn icon_or(icon: Option<&String>, default: &str) -> String {
    match icon {
        Some(icon) if !icon.is_empty() => icon.clone(),
        _ => default.to_string(),
    }
}

fn feed_item(signal: &FeedSignal) -> ItemView {
    ItemView {
        id: signal.id.clone(),
        icon: icon_or(signal.icon.as_ref(), DEFAULT_SIGNAL_ICON),
        heading: signal.title.clone(),
        lines: vec![signal.description.clone()],
        meta: Some(signal.timestamp.clone()),
    }
}

fn event_item(event: &CalendarEvent) -> ItemView {
    let when = match event.location.as_deref() {
        Some(location) if !location.is_empty() => format!("{} - {}", event.time, location),
        _ => event.time.clone(),
    };
    ItemView {
        id: event.id.clone(),
        icon: icon_or(event.icon.as_ref(), DEFAULT_EVENT_ICON),
        heading: event.title.clone(),
        lines: vec![when],
        meta: None,
    }
}

fn email_item(email: &DigestEmail) -> ItemView {
    ItemView {
        id: email.id.clone(),
        icon: icon_or(email.icon.as_ref(), DEFAULT_EMAIL_ICON),
        heading: email.subject.clone(),
        lines: vec![format!("From: {}", email.sender), email.preview.clone()],
        meta: None,
    }
}
