use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Signal created from the popup form or the context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    #[serde(rename = "pageTitle")]
    pub page_title: String,
}

pub const PAGE_CAPTURE_KIND: &str = "page_capture_hotkey";
pub const CAPTURED_VIA_HOTKEY: &str = "hotkey";

/// Richer signal shape produced by the content script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCapture {
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub data: PageCaptureData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCaptureData {
    pub url: String,
    pub title: String,
    pub selected_text: Option<String>,
    pub timestamp: String,
    pub captured_via: String,
}

impl PageCapture {
    /// Capture of the whole page triggered by the hotkey; no selection is read.
    pub fn from_hotkey(page: &PageInfo, captured_at: DateTime<Utc>) -> Self {
        Self {
            kind: PAGE_CAPTURE_KIND.to_string(),
            source: page.url.clone(),
            data: PageCaptureData {
                url: page.url.clone(),
                title: page.title.clone(),
                selected_text: None,
                timestamp: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                captured_via: CAPTURED_VIA_HOTKEY.to_string(),
            },
        }
    }
}

/// Body of `POST /api/signals`. Serializes as the inner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignalPayload {
    Signal(Signal),
    PageCapture(PageCapture),
}

impl SignalPayload {
    /// Page URL the payload refers to, for log lines.
    pub fn url(&self) -> &str {
        match self {
            SignalPayload::Signal(signal) => &signal.url,
            SignalPayload::PageCapture(capture) => &capture.data.url,
        }
    }
}

impl From<Signal> for SignalPayload {
    fn from(signal: Signal) -> Self {
        SignalPayload::Signal(signal)
    }
}

impl From<PageCapture> for SignalPayload {
    fn from(capture: PageCapture) -> Self {
        SignalPayload::PageCapture(capture)
    }
}

/// Active browser tab as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabInfo {
    pub url: String,
    pub title: String,
}

/// The page a content script runs in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageInfo {
    pub url: String,
    pub title: String,
}

/// Payload of `GET /api/dashboard-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: Stats,
    #[serde(default)]
    pub signal_feed: Option<Vec<FeedSignal>>,
    #[serde(default)]
    pub calendar_events: Option<Vec<CalendarEvent>>,
    #[serde(default)]
    pub email_digest: Option<Vec<DigestEmail>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_signals: u64,
    pub pending_actions: u64,
    pub upcoming_events: u64,
    pub emails_processed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSignal {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: String,
    pub description: String,
    pub timestamp: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub time: String,
    pub location: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestEmail {
    pub id: String,
    pub subject: String,
    pub sender: String,
    pub preview: String,
    pub icon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn signal_uses_page_title_key() {
        let signal = Signal {
            title: "T".into(),
            description: "D".into(),
            source: "S".into(),
            url: "https://x.test".into(),
            page_title: "X".into(),
        };
        let value = serde_json::to_value(SignalPayload::from(signal)).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "T",
                "description": "D",
                "source": "S",
                "url": "https://x.test",
                "pageTitle": "X"
            })
        );
    }

    #[test]
    fn hotkey_capture_has_null_selection_and_iso_timestamp() {
        let page = PageInfo {
            url: "https://page.test/a".into(),
            title: "A page".into(),
        };
        let at = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        let value = serde_json::to_value(PageCapture::from_hotkey(&page, at)).unwrap();

        assert_eq!(value["type"], "page_capture_hotkey");
        assert_eq!(value["source"], "https://page.test/a");
        assert_eq!(value["data"]["selected_text"], serde_json::Value::Null);
        assert_eq!(value["data"]["timestamp"], "2024-02-03T04:05:06.000Z");
        assert_eq!(value["data"]["captured_via"], "hotkey");
    }

    #[test]
    fn dashboard_lists_are_optional_but_stats_are_not() {
        let data: DashboardData = serde_json::from_value(json!({
            "stats": {
                "totalSignals": 1,
                "pendingActions": 2,
                "upcomingEvents": 3,
                "emailsProcessed": 4
            }
        }))
        .unwrap();
        assert!(data.signal_feed.is_none());
        assert_eq!(data.stats.emails_processed, 4);

        let missing_stats = serde_json::from_value::<DashboardData>(json!({ "signalFeed": [] }));
        assert!(missing_stats.is_err());

        let negative = serde_json::from_value::<DashboardData>(json!({
            "stats": {
                "totalSignals": -1,
                "pendingActions": 0,
                "upcomingEvents": 0,
                "emailsProcessed": 0
            }
        }));
        assert!(negative.is_err());
    }
}
