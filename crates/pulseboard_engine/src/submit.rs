use pulseboard_core::{Announcement, SignalPayload};
use pulseboard_logging::{pulse_error, pulse_info};

use crate::{ApiError, BrowserHost, PulseApi};

/// Posts one signal and reports the outcome as a notification.
///
/// Shared by every trigger of the background handler. Nothing is retried.
pub async fn submit_and_notify(
    api: &dyn PulseApi,
    host: &dyn BrowserHost,
    payload: SignalPayload,
    announcement: &Announcement,
) -> Result<serde_json::Value, ApiError> {
    let result = api.submit_signal(&payload).await;
    match &result {
        Ok(response) => {
            pulse_info!("Signal for {} accepted: {}", payload.url(), response);
            host.notify(&announcement.outcome::<&ApiError>(Ok(())));
        }
        Err(err) => {
            pulse_error!(
                "Signal for {} rejected ({}): {}",
                payload.url(),
                err.kind,
                err
            );
            host.notify(&announcement.outcome(Err(err)));
        }
    }
    result
}
