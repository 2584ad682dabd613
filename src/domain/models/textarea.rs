use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(TextArea::block("Ask me about the document..."));

        return textarea;
    }

    pub fn block(title: &'a str) -> Block<'a> {
        return Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(title)
            .padding(Padding::new(1, 1, 0, 0));
    }
}
