//! Status bar rendering with mode indicators and keybindings

use crate::engine::calculator::MenuState;
use crate::engine::ops::Operator;
use crate::memory::real::DisplayMode;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub radians: bool,
    pub mode: DisplayMode,
    pub queue_len: usize,
    pub secondary: bool,
    pub menu: MenuState,
    pub theme: &'a Theme,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let theme = data.theme;
    let badge = Style::default()
        .bg(theme.accent(data.secondary))
        .fg(theme.bg)
        .add_modifier(Modifier::BOLD);
    let plain = Style::default().bg(theme.bg).fg(theme.text);

    // Left side: modes and queue count
    let mut left_spans = vec![
        Span::styled(if data.radians { " R " } else { " D " }, badge),
        Span::styled(format!(" Q:{} ", data.queue_len), plain),
        Span::styled(
            match data.mode {
                DisplayMode::Scientific => " SCI ",
                DisplayMode::Normal => " NORM ",
            },
            plain,
        ),
    ];

    if data.secondary {
        left_spans.push(Span::styled(" 2ND ", badge));
    }

    match data.menu {
        MenuState::Closed => {}
        MenuState::Armed => left_spans.push(Span::styled(" ALPHA ", badge)),
        MenuState::Selecting => {
            left_spans.push(Span::styled(" THEME ", badge));
            left_spans.push(Span::styled(format!(" {} ", theme.name), plain));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(plain)
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds for the current layer
    let key_style = Style::default().bg(theme.primary).fg(theme.bg);
    let hints: Vec<(&str, &str)> = if data.menu == MenuState::Selecting {
        vec![("↑", "next"), ("↵", "keep")]
    } else if data.secondary {
        vec![
            ("↵", "undo"),
            ("q", Operator::SquareRoot.symbol()),
            ("^", Operator::Pi.symbol()),
            ("m", "quit"),
        ]
    } else {
        vec![("↵", "enter"), ("⌫", "del"), ("⇥", "2nd"), ("v/p", "sto/rcl")]
    };

    let mut right_spans = Vec::new();
    for (key, desc) in hints {
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), plain));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(plain)
            .alignment(Alignment::Right),
        layout[1],
    );
}
