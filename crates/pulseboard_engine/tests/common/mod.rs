#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use pulseboard_core::{ContextMenuItem, DashboardData, Notification, SignalPayload, TabInfo};
use pulseboard_engine::{ApiError, BrowserHost, FailureKind, HostError, PulseApi};

pub fn init_logging() {
    pulseboard_logging::initialize_for_tests();
}

#[derive(Default)]
pub struct RecordingHost {
    pub tab: Option<TabInfo>,
    pub notifications: Mutex<Vec<Notification>>,
    pub menus: Mutex<Vec<ContextMenuItem>>,
    pub alerts: Mutex<Vec<String>>,
    pub closed: Mutex<usize>,
}

impl RecordingHost {
    pub fn with_tab(url: &str, title: &str) -> Self {
        Self {
            tab: Some(TabInfo {
                url: url.to_string(),
                title: title.to_string(),
            }),
            ..Self::default()
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn closed(&self) -> usize {
        *self.closed.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl BrowserHost for RecordingHost {
    async fn active_tab(&self) -> Result<TabInfo, HostError> {
        self.tab.clone().ok_or(HostError::NoActiveTab)
    }

    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }

    fn register_context_menu(&self, item: &ContextMenuItem) {
        self.menus.lock().unwrap().push(item.clone());
    }

    fn close_window(&self) {
        *self.closed.lock().unwrap() += 1;
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// In-memory API answering every signal with a fixed result.
pub struct StubApi {
    pub signal_result: Result<serde_json::Value, ApiError>,
    pub submitted: Mutex<Vec<SignalPayload>>,
    pub delay: Duration,
}

impl StubApi {
    pub fn accepting() -> Self {
        Self {
            signal_result: Ok(serde_json::json!({ "message": "Signal created successfully" })),
            submitted: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    /// Answers only after `delay`, like a slow server.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing_with_status(code: u16) -> Self {
        Self {
            signal_result: Err(ApiError {
                kind: FailureKind::HttpStatus(code),
                message: format!("{code} Internal Server Error"),
            }),
            submitted: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn submitted(&self) -> Vec<SignalPayload> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PulseApi for StubApi {
    async fn dashboard_data(&self) -> Result<DashboardData, ApiError> {
        Err(ApiError {
            kind: FailureKind::Network,
            message: "stub has no dashboard".to_string(),
        })
    }

    async fn submit_signal(&self, payload: &SignalPayload) -> Result<serde_json::Value, ApiError> {
        self.submitted.lock().unwrap().push(payload.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.signal_result.clone()
    }
}
