use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use pulseboard_core::{update_popup, PopupEffect, PopupMsg, PopupState, PopupView, SignalPayload};
use pulseboard_logging::{pulse_error, pulse_info};

use crate::{BrowserHost, ClientSettings, PulseApi};

/// Quick-add popup: a title/description form posting the active tab.
///
/// All handlers take `&self`, so form and submit events keep arriving while
/// a post is awaiting its response. The lock is never held across an await.
pub struct PopupController {
    api: Arc<dyn PulseApi>,
    host: Arc<dyn BrowserHost>,
    state: Mutex<PopupState>,
}

impl PopupController {
    pub fn new(api: Arc<dyn PulseApi>, host: Arc<dyn BrowserHost>, settings: &ClientSettings) -> Self {
        Self {
            api,
            host,
            state: Mutex::new(PopupState::new(settings.popup_close_delay)),
        }
    }

    pub fn view(&self) -> PopupView {
        self.lock_state().view()
    }

    pub fn title_changed(&self, title: impl Into<String>) {
        self.dispatch(PopupMsg::TitleChanged(title.into()));
    }

    pub fn description_changed(&self, description: impl Into<String>) {
        self.dispatch(PopupMsg::DescriptionChanged(description.into()));
    }

    /// Handles the form's submit event through to the server's answer.
    ///
    /// On success a window close is scheduled after the close delay; the
    /// returned view already carries the status line.
    pub async fn submit(&self) -> PopupView {
        let mut queue: VecDeque<PopupEffect> = self.dispatch(PopupMsg::SubmitClicked).into();
        if queue.is_empty() {
            pulse_info!("Submit ignored; a submission is already pending");
        }

        while let Some(effect) = queue.pop_front() {
            match effect {
                PopupEffect::QueryActiveTab => {
                    let msg = match self.host.active_tab().await {
                        Ok(tab) => PopupMsg::ActiveTabResolved(tab),
                        Err(err) => {
                            pulse_error!("Active tab lookup failed: {}", err);
                            PopupMsg::ActiveTabUnavailable(err.to_string())
                        }
                    };
                    queue.extend(self.dispatch(msg));
                }
                PopupEffect::PostSignal(signal) => {
                    let msg = match self.api.submit_signal(&SignalPayload::from(signal)).await {
                        Ok(response) => {
                            pulse_info!("Signal added: {}", response);
                            PopupMsg::SubmitSucceeded
                        }
                        Err(err) => {
                            pulse_error!("Error adding signal ({}): {}", err.kind, err);
                            PopupMsg::SubmitFailed(err.to_string())
                        }
                    };
                    queue.extend(self.dispatch(msg));
                }
                PopupEffect::CloseWindow { after } => {
                    let host = Arc::clone(&self.host);
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        host.close_window();
                    });
                }
            }
        }

        self.view()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PopupState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, msg: PopupMsg) -> Vec<PopupEffect> {
        let mut guard = self.lock_state();
        let state = std::mem::take(&mut *guard);
        let (state, effects) = update_popup(state, msg);
        *guard = state;
        effects
    }
}
