//! PulseBoard engine: HTTP client, host port and the async surface controllers.
mod api;
mod background;
mod content;
mod dashboard;
mod host;
mod popup;
mod relay;
mod settings;
mod submit;
mod types;

pub use api::{PulseApi, ReqwestApi};
pub use background::BackgroundHandler;
pub use content::{ContentScript, KeyDisposition};
pub use dashboard::{DashboardPoller, ViewSink};
pub use host::BrowserHost;
pub use popup::PopupController;
pub use relay::{relay_channel, AckHandle, RelayAck, RelayEnvelope, RelayReceiver, RelaySender};
pub use settings::{ClientSettings, DASHBOARD_PATH, DEFAULT_API_ORIGIN, SIGNALS_PATH};
pub use submit::submit_and_notify;
pub use types::{ApiError, FailureKind, HostError};
