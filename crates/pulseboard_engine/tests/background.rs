mod common;

use std::sync::Arc;

use common::{RecordingHost, StubApi};
use pulseboard_core::{ContextMenuClick, MenuContext, NotificationKind, TabInfo, MENU_ITEM_ID};
use pulseboard_engine::{BackgroundHandler, ClientSettings, ReqwestApi};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn click(menu_item_id: &str) -> ContextMenuClick {
    ContextMenuClick {
        menu_item_id: menu_item_id.to_string(),
        tab: TabInfo {
            url: "https://docs.test/guide".into(),
            title: "Guide".into(),
        },
    }
}

#[test]
fn install_registers_page_menu_each_time() {
    let host = Arc::new(RecordingHost::default());
    let handler = BackgroundHandler::new(Arc::new(StubApi::accepting()), host.clone());

    handler.on_installed();
    handler.on_installed();

    let menus = host.menus.lock().unwrap();
    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0].id, "saveToPulseBoard");
    assert_eq!(menus[0].title, "Save to PulseBoard");
    assert_eq!(menus[0].contexts, vec![MenuContext::Page]);
}

#[tokio::test]
async fn context_menu_click_posts_and_notifies_success() {
    common::init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signals"))
        .and(body_json(json!({
            "title": "Context Menu Save: Guide",
            "description": "Saved from context menu.",
            "source": "Chrome Extension Context Menu",
            "url": "https://docs.test/guide",
            "pageTitle": "Guide"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ReqwestApi::new(&ClientSettings::with_origin(server.uri())).unwrap();
    let host = Arc::new(RecordingHost::default());
    let handler = BackgroundHandler::new(Arc::new(api), host.clone());

    let result = handler.on_context_menu_clicked(&click(MENU_ITEM_ID)).await;
    assert!(matches!(result, Some(Ok(_))));

    let notes = host.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Basic);
    assert_eq!(notes[0].title, "PulseBoard");
    assert_eq!(notes[0].icon_url, "icons/icon48.png");
    assert_eq!(notes[0].message, "Page saved to PulseBoard successfully!");
}

#[tokio::test]
async fn context_menu_failure_notification_includes_error() {
    common::init_logging();
    let api = Arc::new(StubApi::failing_with_status(500));
    let host = Arc::new(RecordingHost::default());
    let handler = BackgroundHandler::new(api, host.clone());

    let result = handler.on_context_menu_clicked(&click(MENU_ITEM_ID)).await;
    assert!(matches!(result, Some(Err(_))));

    let notes = host.notifications();
    assert_eq!(
        notes[0].message,
        "Failed to save page to PulseBoard: 500 Internal Server Error"
    );
}

#[tokio::test]
async fn clicks_on_other_items_are_ignored() {
    let api = Arc::new(StubApi::accepting());
    let host = Arc::new(RecordingHost::default());
    let handler = BackgroundHandler::new(api.clone(), host.clone());

    assert!(handler.on_context_menu_clicked(&click("other")).await.is_none());
    assert!(api.submitted().is_empty());
    assert!(host.notifications().is_empty());
}
