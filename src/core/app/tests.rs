use super::*;
use crate::core::constants::GREETING;
use crate::core::key_entry::KeyEntryState;
use crate::core::message::TranscriptRole;
use crate::utils::test_utils::{
    create_test_app, create_test_app_without_key, ScriptedGateway, TEST_KEY,
};

fn contents(app: &App) -> Vec<(TranscriptRole, String, bool)> {
    app.messages()
        .iter()
        .map(|m| (m.role(), m.content().to_string(), m.is_error()))
        .collect()
}

#[test]
fn new_app_starts_with_greeting_and_no_pending_request() {
    let app = create_test_app();
    assert_eq!(
        contents(&app),
        vec![(TranscriptRole::Assistant, GREETING.to_string(), false)]
    );
    assert!(!app.is_pending());
    assert_eq!(app.key_entry.state(), KeyEntryState::Closed);
}

#[test]
fn app_without_key_opens_key_entry_at_startup() {
    let app = create_test_app_without_key();
    assert_eq!(app.key_entry.state(), KeyEntryState::Open);
}

#[tokio::test]
async fn successful_send_appends_user_then_assistant() {
    let mut app = create_test_app();
    let gateway = ScriptedGateway::replying("Hi there!");

    app.send_message_with("Hello", &gateway)
        .await
        .expect("send accepted");

    assert_eq!(
        contents(&app)[1..],
        [
            (TranscriptRole::User, "Hello".to_string(), false),
            (TranscriptRole::Assistant, "Hi there!".to_string(), false),
        ]
    );
    assert!(!app.is_pending());
    assert_eq!(
        gateway.calls(),
        vec![("Hello".to_string(), TEST_KEY.to_string())]
    );
}

#[tokio::test]
async fn failed_send_appends_error_flagged_fallback() {
    for error in [
        GatewayError::RequestFailed {
            status: Some(403),
            detail: "API key not valid".to_string(),
        },
        GatewayError::MalformedResponse {
            detail: "no candidates".to_string(),
        },
    ] {
        let mut app = create_test_app();
        let gateway = ScriptedGateway::failing(error);

        app.send_message_with("Hello", &gateway)
            .await
            .expect("send accepted");

        assert_eq!(
            contents(&app)[1..],
            [
                (TranscriptRole::User, "Hello".to_string(), false),
                (TranscriptRole::Assistant, FALLBACK_REPLY.to_string(), true),
            ]
        );
        assert!(!app.is_pending());
    }
}

#[test]
fn reply_text_is_recorded_verbatim() {
    let mut app = create_test_app();
    let reply = "  **bold**\n\n```rust\nfn main() {}\n```\n<script>x</script>  ";
    app.send_message("Show me code").expect("accepted");
    app.finish_request(Ok(reply.to_string()));
    assert_eq!(app.messages().last().map(Message::content), Some(reply));
}

#[test]
fn blank_input_is_ignored() {
    for text in ["", "   ", "\n\t "] {
        for mut app in [create_test_app(), create_test_app_without_key()] {
            let key_entry_before = app.key_entry.state();
            assert_eq!(app.send_message(text), Err(SendRejection::EmptyInput));
            assert_eq!(app.messages().len(), 1);
            assert!(!app.is_pending());
            assert!(app.notice().is_none());
            assert_eq!(app.key_entry.state(), key_entry_before);
        }
    }
}

#[test]
fn missing_key_raises_notice_without_touching_conversation() {
    let mut app = create_test_app_without_key();
    app.cancel_key_entry();
    app.ui.set_input_text("Hello");

    assert_eq!(app.submit_input(), Err(SendRejection::MissingKey));
    assert_eq!(app.messages().len(), 1);
    assert!(!app.is_pending());
    assert_eq!(app.notice(), Some(MISSING_KEY_NOTICE));
    assert_eq!(app.key_entry.state(), KeyEntryState::Open);
    assert_eq!(app.ui.input_text(), "Hello");
}

#[test]
fn second_send_while_pending_is_dropped() {
    let mut app = create_test_app();
    let request = app.send_message("first").expect("accepted");
    assert_eq!(request.prompt, "first");
    assert_eq!(request.api_key, TEST_KEY);
    assert!(app.is_pending());

    app.ui.set_input_text("second");
    assert_eq!(app.submit_input(), Err(SendRejection::Pending));
    assert_eq!(app.messages().len(), 2);
    assert!(app.is_pending());
    assert_eq!(app.ui.input_text(), "second");

    app.finish_request(Ok("reply".to_string()));
    assert!(!app.is_pending());
    assert_eq!(app.messages().len(), 3);
}

#[test]
fn pending_flag_spans_exactly_one_request() {
    let mut app = create_test_app();
    assert!(!app.is_pending());
    app.send_message("Hello").expect("accepted");
    assert!(app.is_pending());
    app.finish_request(Err(GatewayError::RequestFailed {
        status: None,
        detail: "connection refused".to_string(),
    }));
    assert!(!app.is_pending());

    // A stray second outcome must not append anything.
    app.finish_request(Ok("late".to_string()));
    assert_eq!(app.messages().len(), 3);
}

#[test]
fn accepted_send_clears_input_and_sends_only_latest_text() {
    let mut app = create_test_app();
    app.send_message("earlier").expect("accepted");
    app.finish_request(Ok("ok".to_string()));

    app.ui.set_input_text("  latest question\nwith two lines ");
    let request = app.submit_input().expect("accepted");
    assert_eq!(request.prompt, "  latest question\nwith two lines ");
    assert_eq!(app.ui.input_text(), "");
    assert_eq!(
        app.messages().last().map(Message::content),
        Some("  latest question\nwith two lines ")
    );
}

#[test]
fn saving_key_unblocks_sending() {
    let mut app = create_test_app_without_key();
    app.cancel_key_entry();
    assert_eq!(app.send_message("Hello"), Err(SendRejection::MissingKey));

    app.key_entry.paste("AIza-new-key");
    assert_eq!(app.save_key(), Ok("AIza-new-key".to_string()));
    assert!(app.has_key());
    assert!(app.notice().is_none());
    assert_eq!(app.key_entry.state(), KeyEntryState::Closed);

    let request = app.send_message("Hello").expect("accepted");
    assert_eq!(request.api_key, "AIza-new-key");
}

#[test]
fn empty_key_save_keeps_previous_key() {
    let mut app = create_test_app();
    // A fresh open form with a blank field.
    app.key_entry = KeyEntry::new(false);
    assert_eq!(app.save_key(), Err(KeyEntryError::Empty));
    assert_eq!(app.session.api_key.as_deref(), Some(TEST_KEY));
    assert!(app.key_entry.is_open());
}

#[test]
fn cancel_key_entry_does_not_commit() {
    let mut app = create_test_app();
    app.open_key_entry();
    app.key_entry.paste("-edited");
    app.cancel_key_entry();
    assert_eq!(app.session.api_key.as_deref(), Some(TEST_KEY));
    assert!(!app.key_entry.is_open());
}

#[test]
fn appending_scrolls_back_to_bottom() {
    let mut app = create_test_app();
    app.ui.scroll_up(10);
    app.send_message("Hello").expect("accepted");
    assert!(app.ui.is_following());
}
