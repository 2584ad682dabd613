use std::collections::HashMap;

use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Message;
use crate::domain::models::Sender;

#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

/// Rendered lines for each message, cached by message id. Messages never
/// change after being logged, so an entry only goes stale when the width
/// changes or the message leaves the log.
#[derive(Default)]
pub struct BubbleList {
    cache: HashMap<String, Vec<Line<'static>>>,
    order: Vec<String>,
    line_width: usize,
    lines_len: usize,
}

impl BubbleList {
    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        self.order = messages
            .iter()
            .map(|message| return message.id.to_string())
            .collect();
        self.cache.retain(|id, _| return self.order.contains(id));

        for message in messages {
            if self.cache.contains_key(&message.id) {
                continue;
            }

            let mut align = BubbleAlignment::Left;
            if message.sender == Sender::User {
                align = BubbleAlignment::Right;
            }

            let lines = Bubble::new(message, align, line_width).as_lines();
            self.cache.insert(message.id.to_string(), lines);
        }

        self.lines_len = self
            .cache
            .values()
            .map(|lines| return lines.len())
            .sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn widget(&self, scroll: u16) -> Paragraph<'static> {
        let lines: Vec<Line<'static>> = self
            .order
            .iter()
            .filter_map(|id| return self.cache.get(id))
            .flat_map(|lines| return lines.to_owned())
            .collect();

        return Paragraph::new(lines)
            .block(Block::default())
            .scroll((scroll, 0));
    }
}
