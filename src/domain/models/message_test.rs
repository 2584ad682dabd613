use super::Message;
use super::Sender;
use crate::domain::models::ChatReply;

#[test]
fn it_executes_new() {
    let msg = Message::new(Sender::Assistant, "Hi there!");
    assert_eq!(msg.sender, Sender::Assistant);
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.is_related, None);
    assert_eq!(msg.confidence, None);
    assert!(!msg.id.is_empty());
}

#[test]
fn it_keeps_tabs_in_text() {
    let msg = Message::new(Sender::User, "\t\tHi there!");
    assert_eq!(msg.text, "\t\tHi there!".to_string());
}

#[test]
fn it_expands_tabs_when_wrapping() {
    let msg = Message::new(Sender::User, "\t\tHi there!");
    assert_eq!(msg.as_string_lines(20), vec!["    Hi there!"]);
}

#[test]
fn it_creates_unique_ids() {
    let first = Message::new(Sender::User, "Hi");
    let second = Message::new(Sender::User, "Hi");
    assert_ne!(first.id, second.id);
}

#[test]
fn it_executes_from_reply() {
    let msg = Message::from_reply(&ChatReply {
        response: "It's about X.".to_string(),
        is_related: Some(true),
        confidence: Some(0.9),
    });

    assert_eq!(msg.sender, Sender::Assistant);
    assert_eq!(msg.text, "It's about X.");
    assert_eq!(msg.is_related, Some(true));
    assert_eq!(msg.confidence, Some(0.9));
}

#[test]
fn it_executes_from_reply_without_metadata() {
    let msg = Message::from_reply(&ChatReply {
        response: "Sure.".to_string(),
        is_related: None,
        confidence: None,
    });

    assert_eq!(msg.is_related, None);
    assert_eq!(msg.confidence, None);
    assert_eq!(msg.relation_label(), None);
}

#[test]
fn it_labels_related_replies() {
    let mut msg = Message::new(Sender::Assistant, "Yes");
    msg.is_related = Some(true);
    assert_eq!(msg.relation_label(), Some("✓ Related to document"));

    msg.is_related = Some(false);
    assert_eq!(msg.relation_label(), Some("⚠ Not related to document"));
}

#[test]
fn it_never_labels_user_messages() {
    let mut msg = Message::new(Sender::User, "Yes");
    msg.is_related = Some(true);
    assert_eq!(msg.relation_label(), None);
}

#[test]
fn it_wraps_lines() {
    let msg = Message::new(Sender::User, "one two three four five");
    assert_eq!(
        msg.as_string_lines(10),
        vec!["one two", "three", "four five"]
    );
}

#[test]
fn it_keeps_blank_lines() {
    let msg = Message::new(Sender::User, "first\n\nsecond");
    assert_eq!(msg.as_string_lines(20), vec!["first", " ", "second"]);
}

#[test]
fn it_does_not_emit_empty_line_for_long_word() {
    let msg = Message::new(Sender::User, "abcdefghijklmnop");
    assert_eq!(msg.as_string_lines(5), vec!["abcdefghijklmnop"]);
}
