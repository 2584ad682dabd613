#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;
use uuid::Uuid;

use super::ChatReply;
use super::Sender;

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub created_at: DateTime<Local>,
    pub is_related: Option<bool>,
    pub confidence: Option<f64>,
}

impl Message {
    pub fn new(sender: Sender, text: &str) -> Message {
        return Message {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            sender,
            created_at: Local::now(),
            is_related: None,
            confidence: None,
        };
    }

    pub fn from_reply(reply: &ChatReply) -> Message {
        let mut message = Message::new(Sender::Assistant, &reply.response);
        message.is_related = reply.is_related;
        message.confidence = reply.confidence;

        return message;
    }

    /// Footer shown under assistant replies when the service reported
    /// whether the question related to the document.
    pub fn relation_label(&self) -> Option<&'static str> {
        if self.sender != Sender::Assistant {
            return None;
        }

        match self.is_related {
            Some(true) => return Some("✓ Related to document"),
            Some(false) => return Some("⚠ Not related to document"),
            None => return None,
        }
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        let text = self.text.replace('\t', "  ");

        for full_line in text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                let word_len = word.chars().count();
                if !current_lines.is_empty() && word_len + char_count + 1 > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word_len + 1;
                } else {
                    current_lines.push(word);
                    char_count += word_len + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
