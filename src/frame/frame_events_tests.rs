//! Tests for frame/frame_events

use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use crate::messaging::{BackgroundMessage, Outbound};
use crate::test_utils::test_helpers::{drain, key, key_with_mods, test_frame};

#[tokio::test(start_paused = true)]
async fn test_typing_schedules_completions() {
    let (mut frame, _rx) = test_frame(&[]);
    frame.fillcmdline("", false, false);

    for c in "tab".chars() {
        frame.handle_key(key(KeyCode::Char(c))).unwrap();
    }
    frame.settle().await;

    assert_eq!(frame.get_content(), "tab");
    let sources = frame.registry().sources();
    assert_eq!(sources[0].options(), vec!["tabclose", "tabopen"]);
}

#[tokio::test(start_paused = true)]
async fn test_tab_then_enter_submits_completion() {
    let (mut frame, mut rx) = test_frame(&[]);
    frame.fillcmdline("rel", false, true);
    frame.settle().await;

    frame.handle_key(key(KeyCode::Tab)).unwrap();
    frame.handle_key(key(KeyCode::Enter)).unwrap();

    let sent = drain(&mut rx);
    assert!(sent.contains(&Outbound::Background(BackgroundMessage::RecvExStr("reload".into()))));
    assert!(!frame.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_space_accepts_completion() {
    let (mut frame, _rx) = test_frame(&[]);
    frame.fillcmdline("tabo", false, true);
    frame.settle().await;

    frame.handle_key(key(KeyCode::Tab)).unwrap();
    frame.handle_key(key(KeyCode::Char(' '))).unwrap();

    assert_eq!(frame.get_content(), "tabopen ");
}

#[tokio::test(start_paused = true)]
async fn test_up_recalls_history() {
    let (mut frame, _rx) = test_frame(&["open a", "set x", "open b"]);
    frame.fillcmdline("open", true, false);

    frame.handle_key(key(KeyCode::Up)).unwrap();
    assert_eq!(frame.get_content(), "open b");

    frame.handle_key(key(KeyCode::Up)).unwrap();
    assert_eq!(frame.get_content(), "open a");

    frame.handle_key(key(KeyCode::Down)).unwrap();
    frame.handle_key(key(KeyCode::Down)).unwrap();
    assert_eq!(frame.get_content(), "open ");
}

#[tokio::test(start_paused = true)]
async fn test_escape_closes_without_sending() {
    let (mut frame, mut rx) = test_frame(&[]);
    frame.fillcmdline("open", true, true);

    frame.handle_key(key(KeyCode::Esc)).unwrap();
    frame.settle().await;

    assert!(!frame.is_visible());
    assert!(!frame.registry().is_enabled());
    assert!(
        drain(&mut rx)
            .iter()
            .all(|message| !matches!(message, Outbound::Background(_)))
    );
}

#[tokio::test(start_paused = true)]
async fn test_editing_keys_apply_editor_functions() {
    let (mut frame, _rx) = test_frame(&[]);
    frame.fillcmdline("open example", false, false);

    frame
        .handle_key(key_with_mods(KeyCode::Char('w'), KeyModifiers::CONTROL))
        .unwrap();
    assert_eq!(frame.get_content(), "open ");

    frame
        .handle_key(key_with_mods(KeyCode::Char('a'), KeyModifiers::CONTROL))
        .unwrap();
    frame
        .handle_key(key_with_mods(KeyCode::Char('u'), KeyModifiers::ALT))
        .unwrap();
    assert_eq!(frame.get_content(), "OPEN ");
    frame.settle().await;
}

#[tokio::test(start_paused = true)]
async fn test_enter_is_never_inserted_as_text() {
    let (mut frame, mut rx) = test_frame(&[]);
    frame.fillcmdline("", false, false);

    frame.handle_key(key(KeyCode::Enter)).unwrap();

    assert_eq!(frame.get_content(), "");
    assert!(
        drain(&mut rx)
            .iter()
            .all(|message| !matches!(message, Outbound::Background(_)))
    );
}
