//! Stack pane rendering
//!
//! Values are drawn bottom-up like the calculator screen: the top of the
//! stack sits on the last row, right above the input line, and older values
//! scroll off the top when the pane is too short to show them all.

use crate::memory::real::DisplayMode;
use crate::memory::stack::OperandStack;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the stack pane
pub struct StackRenderData<'a> {
    pub stack: &'a OperandStack,
    pub mode: DisplayMode,
    pub theme: &'a Theme,
    pub secondary: bool,
}

/// Build the visible rows, oldest first, padded so the top of stack is last
pub(crate) fn stack_lines(stack: &OperandStack, mode: DisplayMode, rows: usize) -> Vec<String> {
    let values = stack.values();
    let shown = values.len().min(rows);
    let mut lines = vec![String::new(); rows - shown];

    for (offset, value) in values[values.len() - shown..].iter().enumerate() {
        let level = shown - offset;
        lines.push(format!("{:>3}: {}", level, value.format(mode)));
    }
    lines
}

/// Render the stack pane
pub fn render_stack_pane(frame: &mut Frame, area: Rect, data: StackRenderData) {
    let accent = data.theme.accent(data.secondary);

    let block = Block::default()
        .title(format!(" Stack ({}) ", data.stack.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(data.theme.bg));

    let rows = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = stack_lines(data.stack, data.mode, rows)
        .into_iter()
        .map(|text| Line::from(Span::styled(text, Style::default().fg(data.theme.text))))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::real::Real;

    #[test]
    fn test_top_of_stack_is_last_row() {
        let mut stack = OperandStack::new();
        for v in [1.0, 2.0, 3.0] {
            stack.push(Real::new(v)).unwrap();
        }
        let lines = stack_lines(&stack, DisplayMode::Normal, 5);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "");
        assert_eq!(lines[2], "  3: 1");
        assert_eq!(lines[4], "  1: 3");
    }

    #[test]
    fn test_older_values_scroll_off() {
        let mut stack = OperandStack::new();
        for v in [1.0, 2.0, 3.0] {
            stack.push(Real::new(v)).unwrap();
        }
        let lines = stack_lines(&stack, DisplayMode::Normal, 2);
        assert_eq!(lines, vec!["  2: 2".to_string(), "  1: 3".to_string()]);
    }
}
