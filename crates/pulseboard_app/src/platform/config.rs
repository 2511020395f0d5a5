//! Dashboard configuration: an optional RON file plus environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use pulseboard_core::DigitGrouping;
use pulseboard_engine::ClientSettings;
use pulseboard_logging::{pulse_info, pulse_warn, LogDestination, DEFAULT_LOG_FILE};
use serde::Deserialize;
use thiserror::Error;

pub(crate) const CONFIG_FILENAME: &str = "pulseboard.ron";
pub(crate) const ENV_CONFIG_PATH: &str = "PULSEBOARD_CONFIG";
pub(crate) const ENV_API_ORIGIN: &str = "PULSEBOARD_API_ORIGIN";
pub(crate) const ENV_POLL_SECS: &str = "PULSEBOARD_POLL_SECS";
pub(crate) const ENV_LOG: &str = "PULSEBOARD_LOG";
pub(crate) const ENV_LOG_FILE: &str = "PULSEBOARD_LOG_FILE";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Every field is optional; anything unset keeps the client default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) api_origin: Option<String>,
    pub(crate) poll_interval_secs: Option<u64>,
    pub(crate) popup_close_delay_ms: Option<u64>,
    pub(crate) connect_timeout_secs: Option<u64>,
    pub(crate) request_timeout_secs: Option<u64>,
    pub(crate) max_body_bytes: Option<u64>,
    pub(crate) digit_separator: Option<char>,
}

impl AppConfig {
    pub(crate) fn client_settings(&self) -> ClientSettings {
        let defaults = ClientSettings::default();
        ClientSettings {
            api_origin: self.api_origin.clone().unwrap_or(defaults.api_origin),
            poll_interval: self
                .poll_interval_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.poll_interval),
            popup_close_delay: self
                .popup_close_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.popup_close_delay),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_body_bytes: self.max_body_bytes.unwrap_or(defaults.max_body_bytes),
            digit_grouping: self
                .digit_separator
                .map(|separator| DigitGrouping { separator })
                .unwrap_or(defaults.digit_grouping),
        }
    }

    /// Applies `PULSEBOARD_*` overrides. Unparseable values are ignored.
    pub(crate) fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(origin) = lookup(ENV_API_ORIGIN).filter(|v| !v.trim().is_empty()) {
            self.api_origin = Some(origin.trim().to_string());
        }
        if let Some(raw) = lookup(ENV_POLL_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.poll_interval_secs = Some(secs),
                Err(err) => pulse_warn!("Ignoring {}={:?}: {}", ENV_POLL_SECS, raw, err),
            }
        }
    }
}

pub(crate) fn config_path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// A missing file yields the defaults.
pub(crate) fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    pulse_info!("Loaded configuration from {:?}", path);
    Ok(config)
}

/// Log output chosen by `PULSEBOARD_LOG` (`file`, `terminal` or `both`) and
/// `PULSEBOARD_LOG_FILE`. Read before the logger exists, so unknown values
/// silently fall back to the log file.
pub(crate) fn log_destination(lookup: impl Fn(&str) -> Option<String>) -> LogDestination {
    let file = || match lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
        Some(path) => PathBuf::from(path.trim()),
        None => PathBuf::from(DEFAULT_LOG_FILE),
    };
    match lookup(ENV_LOG).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("terminal") => LogDestination::Terminal,
        Some("both") => LogDestination::Both(file()),
        _ => LogDestination::File(file()),
    }
}

/// Reads the config file and environment; falls back to defaults on error.
pub(crate) fn load_settings(lookup: impl Fn(&str) -> Option<String>) -> ClientSettings {
    let path = config_path(&lookup);
    let mut config = read_config(&path).unwrap_or_else(|err| {
        pulse_warn!("{}; using defaults", err);
        AppConfig::default()
    });
    config.apply_env(&lookup);
    config.client_settings()
}
