#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Message;
use crate::domain::models::Sender;

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    /// Vertical bar plus one space, on both sides.
    pub bubble_padding: usize,
    /// left border + left padding + (text, not counted) + right padding + right
    /// border + scrollbar.
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn repeat(text: &str, count: usize) -> String {
    return [text].repeat(count).join("");
}

fn width(text: &str) -> usize {
    return text.chars().count();
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            bubble_padding: 4,
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let username = self.message.sender.to_string();
        let text_lines = self.message.as_string_lines(self.max_text_width());
        let label = self.message.relation_label();

        let mut max_line_length = text_lines
            .iter()
            .map(|line| return width(line))
            .max()
            .unwrap_or_default()
            .max(width(&username));
        if let Some(label) = label {
            max_line_length = max_line_length.max(width(label));
        }

        let mut lines = vec![self.top_bar(&username, max_line_length)];
        for text_line in text_lines {
            lines.push(self.content_line(Span::from(text_line), max_line_length));
        }
        if let Some(label) = label {
            lines.push(self.content_line(
                Span::styled(label.to_string(), self.label_style()),
                max_line_length,
            ));
        }
        lines.push(self.bottom_bar(max_line_length));

        return lines;
    }

    fn max_text_width(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        return self
            .window_max_width
            .saturating_sub(style_config.border_elements_length + min_bubble_padding_length)
            .max(1);
    }

    fn outer_padding(&self, max_line_length: usize) -> String {
        let bubble_width = max_line_length + Bubble::style_config().bubble_padding;
        return repeat(" ", self.window_max_width.saturating_sub(bubble_width));
    }

    fn align(&self, spans: Vec<Span<'static>>, max_line_length: usize) -> Line<'static> {
        let padding = Span::from(self.outer_padding(max_line_length));
        if self.alignment == BubbleAlignment::Left {
            let mut line_spans = spans;
            line_spans.push(padding);
            return Line::from(line_spans);
        }

        let mut line_spans = vec![padding];
        line_spans.extend(spans);
        return Line::from(line_spans);
    }

    fn content_line(&self, span: Span<'static>, max_line_length: usize) -> Line<'static> {
        let fill = repeat(" ", max_line_length.saturating_sub(width(&span.content)));
        let spans = vec![
            self.border_span("│ ".to_string()),
            span,
            self.border_span(format!("{fill} │")),
        ];

        return self.align(spans, max_line_length);
    }

    fn top_bar(&self, username: &str, max_line_length: usize) -> Line<'static> {
        // Add 2 for the padding next to the vertical bars.
        let inner_bar = repeat("─", (max_line_length + 2).saturating_sub(width(username)));
        let bar = format!("╭{username}{inner_bar}╮");

        return self.align(vec![self.border_span(bar)], max_line_length);
    }

    fn bottom_bar(&self, max_line_length: usize) -> Line<'static> {
        let bar = format!("╰{}╯", repeat("─", max_line_length + 2));

        return self.align(vec![self.border_span(bar)], max_line_length);
    }

    fn label_style(&self) -> Style {
        if self.message.is_related == Some(true) {
            return Style {
                fg: Some(Color::Green),
                ..Style::default()
            };
        }

        return Style {
            fg: Some(Color::Rgb(255, 140, 0)), // Orange
            ..Style::default()
        };
    }

    fn border_span(&self, text: String) -> Span<'static> {
        if self.message.sender == Sender::Assistant {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Rgb(138, 85, 63)), // Brown
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }
}
