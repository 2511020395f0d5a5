use std::time::Duration;

use pulseboard_core::{DigitGrouping, DEFAULT_CLOSE_DELAY};
use url::Url;

use crate::{ApiError, FailureKind};

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:18880";
pub const DASHBOARD_PATH: &str = "/api/dashboard-data";
pub const SIGNALS_PATH: &str = "/api/signals";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_origin: String,
    pub poll_interval: Duration,
    pub popup_close_delay: Duration,
    /// `None` leaves the HTTP client's default in place.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_body_bytes: u64,
    pub digit_grouping: DigitGrouping,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            poll_interval: Duration::from_secs(30),
            popup_close_delay: DEFAULT_CLOSE_DELAY,
            connect_timeout: None,
            request_timeout: None,
            max_body_bytes: 5 * 1024 * 1024,
            digit_grouping: DigitGrouping::default(),
        }
    }
}

impl ClientSettings {
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            api_origin: origin.into(),
            ..Self::default()
        }
    }

    pub fn dashboard_url(&self) -> Result<Url, ApiError> {
        self.endpoint(DASHBOARD_PATH)
    }

    pub fn signals_url(&self) -> Result<Url, ApiError> {
        self.endpoint(SIGNALS_PATH)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let origin = Url::parse(&self.api_origin)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if origin.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("api origin cannot be a base: {}", self.api_origin),
            ));
        }
        origin
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}
