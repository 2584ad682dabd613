#[cfg(test)]
#[path = "message_log_test.rs"]
mod tests;

use std::slice;

use crate::domain::models::Message;
use crate::domain::models::Sender;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI document assistant. Upload a document (PDF, Word, or text file) and I'll help you understand its content. Ask me anything about the document!";

/// Append-only conversation history. Messages cannot be edited or
/// reordered once appended.
pub struct MessageLog {
    messages: Vec<Message>,
}

impl Default for MessageLog {
    fn default() -> MessageLog {
        return MessageLog {
            messages: vec![Message::new(Sender::Assistant, WELCOME_MESSAGE)],
        };
    }
}

impl MessageLog {
    pub fn append(&mut self, message: Message) {
        debug_assert!(
            !self.messages.iter().any(|e| return e.id == message.id),
            "message ids must be unique"
        );

        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }

    pub fn last(&self) -> Option<&Message> {
        return self.messages.last();
    }

    pub fn get(&self, idx: usize) -> Option<&Message> {
        return self.messages.get(idx);
    }

    pub fn iter(&self) -> slice::Iter<'_, Message> {
        return self.messages.iter();
    }

    pub fn as_slice(&self) -> &[Message] {
        return &self.messages;
    }
}
