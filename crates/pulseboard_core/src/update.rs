use crate::view_model::{DashboardView, StatusLine, StatusTone};
use crate::{DashboardEffect, DashboardMsg, DashboardState, PopupEffect, PopupMsg, PopupState, Signal};

pub const QUICK_ADD_SOURCE: &str = "Chrome Extension Quick Add";
pub const SIGNAL_ADDED: &str = "Signal added successfully!";
pub const SIGNAL_ERROR_PREFIX: &str = "Error adding signal: ";

/// Pure dashboard update: applies a message and returns any effects.
pub fn update_dashboard(mut state: DashboardState, msg: DashboardMsg) -> (DashboardState, Vec<DashboardEffect>) {
    let effects = match msg {
        DashboardMsg::Tick => {
            // One fetch-then-rerender unit at a time.
            if state.begin_fetch() {
                vec![DashboardEffect::FetchDashboard]
            } else {
                Vec::new()
            }
        }
        DashboardMsg::Loaded(data) => {
            let view = DashboardView::live(&data, state.grouping());
            state.replace_view(view);
            Vec::new()
        }
        DashboardMsg::LoadFailed { .. } => {
            let view = DashboardView::fallback(state.grouping());
            state.replace_view(view);
            Vec::new()
        }
    };

    (state, effects)
}

/// Pure popup update: applies a message and returns any effects.
pub fn update_popup(mut state: PopupState, msg: PopupMsg) -> (PopupState, Vec<PopupEffect>) {
    let effects = match msg {
        PopupMsg::TitleChanged(title) => {
            state.set_title(title);
            Vec::new()
        }
        PopupMsg::DescriptionChanged(description) => {
            state.set_description(description);
            Vec::new()
        }
        PopupMsg::SubmitClicked => {
            if state.begin_submit() {
                vec![PopupEffect::QueryActiveTab]
            } else {
                Vec::new()
            }
        }
        PopupMsg::ActiveTabResolved(tab) => match state.pending() {
            Some(form) => vec![PopupEffect::PostSignal(Signal {
                title: form.title.clone(),
                description: form.description.clone(),
                source: QUICK_ADD_SOURCE.to_string(),
                url: tab.url,
                page_title: tab.title,
            })],
            None => Vec::new(),
        },
        PopupMsg::ActiveTabUnavailable(reason) | PopupMsg::SubmitFailed(reason) => {
            if state.pending().is_some() {
                state.finish_failure(StatusLine {
                    text: format!("{SIGNAL_ERROR_PREFIX}{reason}"),
                    tone: StatusTone::Error,
                });
            }
            Vec::new()
        }
        PopupMsg::SubmitSucceeded => {
            if state.pending().is_some() {
                state.finish_success(StatusLine {
                    text: SIGNAL_ADDED.to_string(),
                    tone: StatusTone::Success,
                });
                vec![PopupEffect::CloseWindow {
                    after: state.close_delay(),
                }]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}
