use futures_util::StreamExt;
use pulseboard_core::{DashboardData, SignalPayload};
use pulseboard_logging::{pulse_debug, pulse_trace};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::{ApiError, ClientSettings, FailureKind};

/// The two calls the client makes against the PulseBoard API.
#[async_trait::async_trait]
pub trait PulseApi: Send + Sync {
    /// `GET /api/dashboard-data`.
    async fn dashboard_data(&self) -> Result<DashboardData, ApiError>;

    /// `POST /api/signals`. Returns the server's JSON acknowledgment.
    async fn submit_signal(&self, payload: &SignalPayload) -> Result<serde_json::Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    dashboard_url: Url,
    signals_url: Url,
    max_bytes: u64,
}

impl ReqwestApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            dashboard_url: settings.dashboard_url()?,
            signals_url: settings.signals_url()?,
            max_bytes: settings.max_body_bytes,
        })
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(ApiError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(ApiError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        pulse_trace!("read {} body bytes", bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

#[async_trait::async_trait]
impl PulseApi for ReqwestApi {
    async fn dashboard_data(&self) -> Result<DashboardData, ApiError> {
        pulse_debug!("GET {}", self.dashboard_url);
        let response = self
            .client
            .get(self.dashboard_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.read_json(response).await
    }

    async fn submit_signal(&self, payload: &SignalPayload) -> Result<serde_json::Value, ApiError> {
        let body = serde_json::to_vec(payload)
            .map_err(|err| ApiError::new(FailureKind::MalformedBody, err.to_string()))?;
        pulse_debug!("POST {} ({} bytes)", self.signals_url, body.len());
        let response = self
            .client
            .post(self.signals_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.read_json(response).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
