use std::time::Duration;

use pulseboard_core::{
    update_popup, PopupEffect, PopupMsg, PopupState, Signal, StatusTone, TabInfo,
};

fn filled(title: &str, description: &str) -> PopupState {
    let (state, _) = update_popup(PopupState::default(), PopupMsg::TitleChanged(title.into()));
    let (state, _) = update_popup(state, PopupMsg::DescriptionChanged(description.into()));
    state
}

fn tab() -> TabInfo {
    TabInfo {
        url: "https://x.test".into(),
        title: "X".into(),
    }
}

#[test]
fn submit_queries_tab_then_posts_signal() {
    let (state, effects) = update_popup(filled("T", "D"), PopupMsg::SubmitClicked);
    assert_eq!(effects, vec![PopupEffect::QueryActiveTab]);
    assert!(state.view().submitting);

    let (_state, effects) = update_popup(state, PopupMsg::ActiveTabResolved(tab()));
    assert_eq!(
        effects,
        vec![PopupEffect::PostSignal(Signal {
            title: "T".into(),
            description: "D".into(),
            source: "Chrome Extension Quick Add".into(),
            url: "https://x.test".into(),
            page_title: "X".into(),
        })]
    );
}

#[test]
fn success_resets_form_and_schedules_close() {
    let (state, _) = update_popup(filled("T", "D"), PopupMsg::SubmitClicked);
    let (state, _) = update_popup(state, PopupMsg::ActiveTabResolved(tab()));
    let (mut state, effects) = update_popup(state, PopupMsg::SubmitSucceeded);

    assert_eq!(
        effects,
        vec![PopupEffect::CloseWindow {
            after: Duration::from_millis(1500)
        }]
    );
    let view = state.view();
    assert_eq!(view.title, "");
    assert_eq!(view.description, "");
    assert!(!view.submitting);
    let status = view.status.expect("status");
    assert_eq!(status.text, "Signal added successfully!");
    assert_eq!(status.tone, StatusTone::Success);
    assert!(state.consume_dirty());
}

#[test]
fn failure_keeps_fields_and_shows_error() {
    let (state, _) = update_popup(filled("T", "D"), PopupMsg::SubmitClicked);
    let (state, _) = update_popup(state, PopupMsg::ActiveTabResolved(tab()));
    let (state, effects) = update_popup(state, PopupMsg::SubmitFailed("http status 500".into()));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.title, "T");
    assert_eq!(view.description, "D");
    let status = view.status.expect("status");
    assert!(status.text.contains("Error adding signal"));
    assert_eq!(status.text, "Error adding signal: http status 500");
    assert_eq!(status.tone, StatusTone::Error);
}

#[test]
fn missing_active_tab_is_reported_as_error() {
    let (state, _) = update_popup(filled("T", "D"), PopupMsg::SubmitClicked);
    let (state, effects) = update_popup(state, PopupMsg::ActiveTabUnavailable("no active tab".into()));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.status.expect("status").tone, StatusTone::Error);
    assert!(!view.submitting);
    assert_eq!(view.title, "T");
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let (state, _) = update_popup(filled("T", "D"), PopupMsg::SubmitClicked);
    let (state, effects) = update_popup(state, PopupMsg::SubmitClicked);
    assert!(effects.is_empty());

    // After the first submission completes a new one is accepted.
    let (state, _) = update_popup(state, PopupMsg::SubmitFailed("boom".into()));
    let (_, effects) = update_popup(state, PopupMsg::SubmitClicked);
    assert_eq!(effects, vec![PopupEffect::QueryActiveTab]);
}

#[test]
fn signal_uses_form_as_submitted() {
    let (state, _) = update_popup(filled("T", "D"), PopupMsg::SubmitClicked);
    // Edits made while the tab lookup is running do not leak into the signal.
    let (state, _) = update_popup(state, PopupMsg::TitleChanged("edited".into()));
    let (_, effects) = update_popup(state, PopupMsg::ActiveTabResolved(tab()));

    match &effects[..] {
        [PopupEffect::PostSignal(signal)] => assert_eq!(signal.title, "T"),
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn stray_responses_without_submission_are_ignored() {
    let state = filled("T", "D");
    let (state, effects) = update_popup(state, PopupMsg::SubmitSucceeded);
    assert!(effects.is_empty());
    assert_eq!(state.view().title, "T");
    assert!(state.view().status.is_none());
}

#[test]
fn custom_close_delay_is_used() {
    let state = PopupState::new(Duration::from_millis(10));
    let (state, _) = update_popup(state, PopupMsg::SubmitClicked);
    let (state, _) = update_popup(state, PopupMsg::ActiveTabResolved(tab()));
    let (_, effects) = update_popup(state, PopupMsg::SubmitSucceeded);
    assert_eq!(
        effects,
        vec![PopupEffect::CloseWindow {
            after: Duration::from_millis(10)
        }]
    );
}
