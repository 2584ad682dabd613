use std::collections::HashSet;

use super::MessageLog;
use super::WELCOME_MESSAGE;
use crate::domain::models::Message;
use crate::domain::models::Sender;

#[test]
fn it_starts_with_welcome() {
    let log = MessageLog::default();
    assert_eq!(log.len(), 1);

    let welcome = log.last().unwrap();
    assert_eq!(welcome.sender, Sender::Assistant);
    assert_eq!(welcome.text, WELCOME_MESSAGE);
}

#[test]
fn it_appends_in_order() {
    let mut log = MessageLog::default();
    log.append(Message::new(Sender::User, "first"));
    log.append(Message::new(Sender::Assistant, "second"));

    let texts = log
        .iter()
        .skip(1)
        .map(|e| return e.text.to_string())
        .collect::<Vec<String>>();

    assert_eq!(texts, vec!["first".to_string(), "second".to_string()]);
    assert_eq!(log.get(1).unwrap().sender, Sender::User);
    assert_eq!(log.as_slice().len(), 3);
}

#[test]
fn it_keeps_ids_unique() {
    let mut log = MessageLog::default();
    for idx in 0..20 {
        log.append(Message::new(Sender::User, &format!("message {idx}")));
    }

    let ids = log
        .iter()
        .map(|e| return e.id.to_string())
        .collect::<HashSet<String>>();
    assert_eq!(ids.len(), log.len());
}
