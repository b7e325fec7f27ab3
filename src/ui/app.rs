//! Main TUI application state and event loop

use super::keymap;
use super::panes::{
    render_input_pane, render_stack_pane, render_status_bar, StackRenderData, StatusRenderData,
};
use super::theme;
use crate::engine::calculator::Calculator;
use crate::engine::dispatch::Flow;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use tracing::info;

/// The main application state
pub struct App {
    /// The calculator engine
    pub calculator: Calculator,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(calculator: Calculator) -> Self {
        App {
            calculator,
            should_quit: false,
        }
    }

    /// Run the TUI application, blocking on one key at a time
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.calculator.take_redraw() {
                terminal.draw(|f| self.render(f))?;
            }

            if self.should_quit {
                break;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                }
                Event::Resize(..) => self.calculator.request_redraw(),
                _ => {}
            }
        }

        info!("calculator closed");
        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let calc = &self.calculator;
        let theme = theme::theme(calc.theme_index());
        let secondary = calc.is_secondary();

        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), size);

        // Stack on top, input line, then status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(size);

        render_stack_pane(
            frame,
            chunks[0],
            StackRenderData {
                stack: calc.stack(),
                mode: calc.display_mode(),
                theme,
                secondary,
            },
        );

        render_input_pane(frame, chunks[1], calc.input(), theme, secondary);

        render_status_bar(
            frame,
            chunks[2],
            StatusRenderData {
                radians: calc.uses_radians(),
                mode: calc.display_mode(),
                queue_len: calc.queue().len(),
                secondary,
                menu: calc.menu_state(),
                theme,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if keymap::is_interrupt(&key) {
            self.should_quit = true;
            return;
        }

        if let Some(keypad) = keymap::map_key(&key) {
            if self.calculator.handle_key(keypad) == Flow::Quit {
                self.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculator::EngineConfig;
    use crate::persist::MemoryStore;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let config = EngineConfig {
            theme_count: theme::THEMES.len(),
            ..EngineConfig::default()
        };
        App::new(Calculator::new(Box::new(MemoryStore::new()), config))
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(48, 10)).expect("test terminal");
        terminal.draw(|f| app.render(f)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_stack_and_input() {
        let mut app = app();
        type_keys(&mut app, "3.14");
        app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        type_keys(&mut app, "2");

        let text = screen_text(&app);
        assert!(text.contains("1: 3.14E0"), "screen was: {}", text);
        assert!(text.contains("2 "));
        assert!(text.contains(" R "));
    }

    #[test]
    fn test_secondary_mode_key_quits() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        type_keys(&mut app, "m");
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
