//! Input line rendering. A pending negative sign inverts the line.

use crate::memory::input::InputBuffer;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &InputBuffer,
    theme: &Theme,
    secondary: bool,
) {
    let accent = theme.accent(secondary);

    let text_style = if input.is_negative() {
        Style::default().bg(accent).fg(theme.bg)
    } else {
        Style::default().bg(theme.bg).fg(theme.text)
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(accent).bg(theme.bg));

    let paragraph = Paragraph::new(input.padded())
        .style(text_style)
        .block(block);
    frame.render_widget(paragraph, area);
}
